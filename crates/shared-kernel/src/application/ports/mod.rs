// crates/shared-kernel/src/application/ports/mod.rs

mod message_consumer;
mod message_producer;

pub use message_consumer::{InboundMessage, MessageConsumer, MessageHandler};
pub use message_producer::{DeliveryReport, DeliveryReports, MessageProducer, OutboundMessage};

#[cfg(any(test, feature = "test-utils"))]
mod message_producer_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use message_producer_stub::MessageProducerStub;
