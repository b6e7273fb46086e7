// crates/shared-kernel/src/infrastructure/postgres/rows/postgres_outbox_row.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::domain::events::OutboxMessage;

#[derive(FromRow)]
pub struct OutboxRow {
    id: i64,
    topic: String,
    event: Vec<u8>,
    headers: Vec<u8>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl From<OutboxRow> for OutboxMessage {
    fn from(row: OutboxRow) -> Self {
        Self {
            id: row.id,
            topic: row.topic,
            event: row.event,
            headers: row.headers,
            created_at: row.created_at,
            completed_at: row.completed_at,
        }
    }
}
