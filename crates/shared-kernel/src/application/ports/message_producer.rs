// crates/shared-kernel/src/application/ports/message_producer.rs

use std::time::Duration;
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;
use crate::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub topic: String,
    /// Partitioning key. Messages sharing a key keep their relative order.
    pub key: String,
    pub payload: Vec<u8>,
    pub headers: Vec<(String, String)>,
}

/// Outcome of one submitted message, reported asynchronously by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryReport {
    Delivered {
        topic: String,
        key: String,
        partition: i32,
        offset: i64,
    },
    Failed {
        topic: String,
        key: String,
        reason: String,
    },
}

/// Acknowledgment channel handed out alongside a producer.
pub type DeliveryReports = UnboundedReceiver<DeliveryReport>;

#[async_trait]
pub trait MessageProducer: Send + Sync {
    /// Hands the message to the client. `Ok` means accepted for sending, not delivered;
    /// the real outcome arrives later on the producer's [`DeliveryReports`].
    fn submit(&self, message: OutboundMessage) -> AppResult<()>;

    /// Waits for queued messages to leave the client.
    async fn flush(&self, timeout: Duration) -> AppResult<()>;
}
