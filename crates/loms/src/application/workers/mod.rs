// crates/loms/src/application/workers/mod.rs

mod order_events_notifier;
mod outbox_publisher;


pub use order_events_notifier::OrderEventsNotifier;
pub use outbox_publisher::OutboxPublisher;
