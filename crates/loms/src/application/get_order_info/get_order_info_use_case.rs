// crates/loms/src/application/get_order_info/get_order_info_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::{Result, ResultExt};

use crate::application::get_order_info::GetOrderInfoQuery;
use crate::domain::entities::Order;
use crate::domain::repositories::OrderRepository;

pub struct GetOrderInfoUseCase {
    order_repo: Arc<dyn OrderRepository>,
}

impl GetOrderInfoUseCase {
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }

    pub async fn execute(&self, query: GetOrderInfoQuery) -> Result<Order> {
        self.order_repo
            .find_by_id(query.order_id)
            .await
            .with_operation("order_repository.find_by_id")
    }
}
