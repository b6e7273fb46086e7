// crates/loms/src/application/list_orders/list_orders_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::{Result, ResultExt};

use crate::domain::entities::Order;
use crate::domain::repositories::OrderRepository;

/// Administrative listing across every shard, newest first.
pub struct ListOrdersUseCase {
    order_repo: Arc<dyn OrderRepository>,
}

impl ListOrdersUseCase {
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }

    pub async fn execute(&self) -> Result<Vec<Order>> {
        self.order_repo.find_all().await.with_operation("order_repository.find_all")
    }
}
