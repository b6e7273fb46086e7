// crates/shared-kernel/src/domain/events/mod.rs

mod outbox_message;

pub use outbox_message::{NewOutboxMessage, OutboxMessage};
