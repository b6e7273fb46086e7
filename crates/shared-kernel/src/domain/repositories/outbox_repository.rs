// crates/shared-kernel/src/domain/repositories/outbox_repository.rs

use crate::domain::events::{NewOutboxMessage, OutboxMessage};
use crate::domain::transaction::Transaction;
use crate::errors::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OutboxRepository: Send + Sync {
    /// Queues a message. Joins `tx` when given so the row commits or rolls back with the
    /// caller's write; runs in autocommit otherwise.
    async fn create(&self, tx: Option<&mut dyn Transaction>, message: NewOutboxMessage) -> Result<i64>;

    /// Pending rows (`completed_at IS NULL`), oldest first.
    async fn get_wait_list(&self) -> Result<Vec<OutboxMessage>>;

    async fn set_complete(&self, id: i64) -> Result<()>;
}
