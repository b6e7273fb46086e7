// crates/loms/src/application/pay_order/pay_order_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::{Result, ResultExt};

use crate::application::item_steps::for_each_item;
use crate::application::pay_order::PayOrderCommand;
use crate::domain::repositories::{OrderRepository, StockRepository};
use crate::domain::value_objects::OrderStatus;

/// Consumes the reservations of an order awaiting payment and marks it paid.
/// A mid-list failure is returned as-is; items already consumed stay consumed.
pub struct PayOrderUseCase {
    order_repo: Arc<dyn OrderRepository>,
    stock_repo: Arc<dyn StockRepository>,
}

impl PayOrderUseCase {
    pub fn new(order_repo: Arc<dyn OrderRepository>, stock_repo: Arc<dyn StockRepository>) -> Self {
        Self { order_repo, stock_repo }
    }

    pub async fn execute(&self, command: PayOrderCommand) -> Result<()> {
        let order = self
            .order_repo
            .find_by_id(command.order_id)
            .await
            .with_operation("order_repository.find_by_id")?;

        order.ensure_status(OrderStatus::AwaitingPayment)?;

        for_each_item(&order.items, "stock_repository.reserve_remove", |item| {
            self.stock_repo.reserve_remove(item.sku, item.count)
        })
        .await?;

        self.order_repo
            .set_status(order.id, OrderStatus::Paid, None)
            .await
            .with_operation("order_repository.set_status")?;

        tracing::info!(order_id = %order.id, "order paid");
        Ok(())
    }
}
