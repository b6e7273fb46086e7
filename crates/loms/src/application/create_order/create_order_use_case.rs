// crates/loms/src/application/create_order/create_order_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::{DomainError, Result, ResultExt};

use crate::application::create_order::CreateOrderCommand;
use crate::domain::entities::{NewOrder, OrderItem};
use crate::domain::repositories::{OrderRepository, StockRepository};
use crate::domain::value_objects::{OrderId, OrderStatus};

/// Creates an order and reserves its items one by one.
///
/// The first failed reservation marks the order `failed` and releases what was already
/// held, in item order. A failed release stops the walk: the original error is returned
/// with the release error and the still-held items attached.
pub struct CreateOrderUseCase {
    order_repo: Arc<dyn OrderRepository>,
    stock_repo: Arc<dyn StockRepository>,
}

impl CreateOrderUseCase {
    pub fn new(order_repo: Arc<dyn OrderRepository>, stock_repo: Arc<dyn StockRepository>) -> Self {
        Self { order_repo, stock_repo }
    }

    pub async fn execute(&self, command: CreateOrderCommand) -> Result<OrderId> {
        let order_id = self
            .order_repo
            .create(NewOrder::new(command.user, command.items.clone()), None)
            .await
            .with_operation("order_repository.create")?;

        tracing::info!(%order_id, user = %command.user, items = command.items.len(), "order created");

        let mut reserved: Vec<OrderItem> = Vec::with_capacity(command.items.len());
        for item in &command.items {
            if let Err(err) = self.stock_repo.reserve(item.sku, item.count).await {
                let err = err.with_operation("stock_repository.reserve");
                tracing::warn!(%order_id, %item, error = %err, "reservation failed, compensating");
                return Err(self.compensate(order_id, &reserved, err).await);
            }
            reserved.push(*item);
        }

        self.order_repo
            .set_status(order_id, OrderStatus::AwaitingPayment, None)
            .await
            .with_operation("order_repository.set_status")?;

        tracing::info!(%order_id, "order awaiting payment");
        Ok(order_id)
    }

    async fn compensate(&self, order_id: OrderId, reserved: &[OrderItem], cause: DomainError) -> DomainError {
        let mut compensation: Option<DomainError> = None;
        let mut unreleased: Vec<String> = Vec::new();

        if let Err(err) = self.order_repo.set_status(order_id, OrderStatus::Failed, None).await {
            tracing::error!(%order_id, error = %err, "could not mark order failed");
            compensation = Some(err.with_operation("order_repository.set_status"));
        }

        for (i, item) in reserved.iter().enumerate() {
            if let Err(err) = self.stock_repo.reserve_cancel(item.sku, item.count).await {
                unreleased = reserved[i..].iter().map(ToString::to_string).collect();
                tracing::error!(%order_id, %item, error = %err, not_released = ?unreleased, "release failed");
                compensation.get_or_insert(err.with_operation("stock_repository.reserve_cancel"));
                break;
            }
        }

        match compensation {
            None => cause,
            Some(compensation) => DomainError::CompensationFailed {
                source: Box::new(cause),
                compensation: Box::new(compensation),
                unreleased,
            },
        }
    }
}
