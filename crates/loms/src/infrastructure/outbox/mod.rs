// crates/loms/src/infrastructure/outbox/mod.rs

mod order_outbox_repository;

pub use order_outbox_repository::OrderOutboxRepository;
