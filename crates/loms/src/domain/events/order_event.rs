// crates/loms/src/domain/events/order_event.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::{OrderId, OrderStatus};

pub const TRACE_ID_HEADER: &str = "TraceID";

/// Order status change as published on the bus.
/// Wire form: `{"OrderID": 1000, "Status": "new", "Time": "<RFC 3339>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    #[serde(rename = "OrderID")]
    pub order_id: OrderId,
    #[serde(rename = "Status")]
    pub status: OrderStatus,
    #[serde(rename = "Time")]
    pub time: DateTime<Utc>,
}

impl OrderEvent {
    pub fn new(order_id: OrderId, status: OrderStatus, time: DateTime<Utc>) -> Self {
        Self { order_id, status, time }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| DomainError::Internal(format!("encode order event: {e}")))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::Validation {
            field: "event",
            reason: e.to_string(),
        })
    }

    /// Partition key: all events of one order land on one partition.
    pub fn key(&self) -> String {
        self.order_id.to_string()
    }
}

/// Diagnostic side channel stored next to each outbox event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventHeaders {
    #[serde(rename = "TraceID")]
    pub trace_id: String,
}

impl EventHeaders {
    pub fn new(trace_id: impl Into<String>) -> Self {
        Self { trace_id: trace_id.into() }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| DomainError::Internal(format!("encode event headers: {e}")))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::Validation {
            field: "headers",
            reason: e.to_string(),
        })
    }
}
