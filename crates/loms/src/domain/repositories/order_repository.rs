// crates/loms/src/domain/repositories/order_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use crate::domain::entities::{NewOrder, Order};
use crate::domain::value_objects::{OrderId, OrderStatus};

/// Extra write executed inside the order write's transaction, before commit.
/// An error aborts the whole transaction.
#[async_trait]
pub trait OrderWriteHook: Send + Sync {
    async fn run(&self, tx: &mut dyn Transaction, order_id: OrderId, status: OrderStatus) -> Result<()>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts header and items in one transaction. An unset status is stored as `new`.
    async fn create(&self, order: NewOrder, hook: Option<&dyn OrderWriteHook>) -> Result<OrderId>;

    async fn find_by_id(&self, id: OrderId) -> Result<Order>;

    async fn set_status(&self, id: OrderId, status: OrderStatus, hook: Option<&dyn OrderWriteHook>) -> Result<()>;

    /// Every order of every shard, newest id first. Administrative.
    async fn find_all(&self) -> Result<Vec<Order>>;
}
