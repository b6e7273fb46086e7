// crates/shared-kernel/src/domain/events/outbox_message.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event queued for publication, written in the same transaction as the change it describes.
/// `event` and `headers` are opaque serialized payloads; only the writer and the publisher know their shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOutboxMessage {
    pub topic: String,
    pub event: Vec<u8>,
    pub headers: Vec<u8>,
}

impl NewOutboxMessage {
    pub fn new(topic: impl Into<String>, event: Vec<u8>, headers: Vec<u8>) -> Self {
        Self {
            topic: topic.into(),
            event,
            headers,
        }
    }
}

/// A persisted outbox row. `completed_at` stays `None` until the publisher hands it to the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxMessage {
    pub id: i64,
    pub topic: String,
    pub event: Vec<u8>,
    pub headers: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl OutboxMessage {
    pub fn is_pending(&self) -> bool {
        self.completed_at.is_none()
    }
}
