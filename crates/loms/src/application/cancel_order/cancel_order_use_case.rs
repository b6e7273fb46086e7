// crates/loms/src/application/cancel_order/cancel_order_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::{Result, ResultExt};

use crate::application::cancel_order::CancelOrderCommand;
use crate::application::item_steps::for_each_item;
use crate::domain::repositories::{OrderRepository, StockRepository};
use crate::domain::value_objects::OrderStatus;

pub struct CancelOrderUseCase {
    order_repo: Arc<dyn OrderRepository>,
    stock_repo: Arc<dyn StockRepository>,
}

impl CancelOrderUseCase {
    pub fn new(order_repo: Arc<dyn OrderRepository>, stock_repo: Arc<dyn StockRepository>) -> Self {
        Self { order_repo, stock_repo }
    }

    pub async fn execute(&self, command: CancelOrderCommand) -> Result<()> {
        let order = self
            .order_repo
            .find_by_id(command.order_id)
            .await
            .with_operation("order_repository.find_by_id")?;

        order.ensure_status(OrderStatus::AwaitingPayment)?;

        for_each_item(&order.items, "stock_repository.reserve_cancel", |item| {
            self.stock_repo.reserve_cancel(item.sku, item.count)
        })
        .await?;

        self.order_repo
            .set_status(order.id, OrderStatus::Cancelled, None)
            .await
            .with_operation("order_repository.set_status")?;

        tracing::info!(order_id = %order.id, "order cancelled");
        Ok(())
    }
}
