// crates/loms/src/domain/repositories/order_repository_stub.rs

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::transaction::FakeTransaction;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{NewOrder, Order};
use crate::domain::repositories::{OrderRepository, OrderWriteHook};
use crate::domain::value_objects::{OrderId, OrderStatus};

#[derive(Default)]
pub struct OrderRepositoryStub {
    pub orders: Arc<Mutex<BTreeMap<OrderId, Order>>>,
    next_seq: Mutex<i64>,
    /// Returned by every method when set
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    /// Returned by `set_status` for one target status only
    pub set_status_errors: Mutex<HashMap<OrderStatus, DomainError>>,
    /// Every `set_status` call, in order
    pub status_calls: Mutex<Vec<(OrderId, OrderStatus)>>,
}

impl OrderRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_order(&self, order: Order) {
        self.orders.lock().unwrap().insert(order.id, order);
    }

    pub fn fail_set_status(&self, status: OrderStatus, error: DomainError) {
        self.set_status_errors.lock().unwrap().insert(status, error);
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.orders.lock().unwrap().get(&id).cloned()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryStub {
    async fn create(&self, order: NewOrder, hook: Option<&dyn OrderWriteHook>) -> Result<OrderId> {
        self.check_error()?;

        let id = {
            let mut seq = self.next_seq.lock().unwrap();
            *seq += 1;
            OrderId::new(*seq * 1000)
        };
        let stored = Order {
            id,
            user: order.user,
            status: order.status.or_new(),
            items: order.items,
        };
        let status = stored.status;

        let mut tx = FakeTransaction::new();
        let orders = self.orders.clone();
        tx.defer(move || {
            orders.lock().unwrap().insert(id, stored);
        });

        if let Some(hook) = hook {
            hook.run(&mut tx, id, status).await?;
        }
        tx.commit();
        Ok(id)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Order> {
        self.check_error()?;
        self.get(id).ok_or_else(|| Order::not_found(id))
    }

    async fn set_status(&self, id: OrderId, status: OrderStatus, hook: Option<&dyn OrderWriteHook>) -> Result<()> {
        self.check_error()?;
        self.status_calls.lock().unwrap().push((id, status));
        if let Some(err) = self.set_status_errors.lock().unwrap().get(&status).cloned() {
            return Err(err);
        }
        let current = self.get(id).ok_or_else(|| Order::not_found(id))?;
        current.ensure_transition(status)?;

        let mut tx = FakeTransaction::new();
        let orders = self.orders.clone();
        tx.defer(move || {
            if let Some(order) = orders.lock().unwrap().get_mut(&id) {
                order.status = status;
            }
        });

        if let Some(hook) = hook {
            hook.run(&mut tx, id, status).await?;
        }
        tx.commit();
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        self.check_error()?;
        Ok(self.orders.lock().unwrap().values().rev().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderItem;
    use crate::domain::value_objects::{Sku, UserId};
    use shared_kernel::errors::ErrorCode;

    async fn created(repo: &OrderRepositoryStub) -> OrderId {
        let order = NewOrder::new(UserId::new(1), vec![OrderItem::new(Sku::new(1), 1)]);
        repo.create(order, None).await.unwrap()
    }

    #[tokio::test]
    async fn second_writer_of_the_same_status_loses() {
        let repo = OrderRepositoryStub::new();
        let id = created(&repo).await;
        repo.set_status(id, OrderStatus::AwaitingPayment, None).await.unwrap();

        repo.set_status(id, OrderStatus::Paid, None).await.unwrap();
        let err = repo.set_status(id, OrderStatus::Paid, None).await.unwrap_err();

        assert_eq!(err.kind(), ErrorCode::InvalidState);
        assert_eq!(repo.get(id).unwrap().status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn write_from_a_non_predecessor_is_rejected() {
        let repo = OrderRepositoryStub::new();
        let id = created(&repo).await;

        for status in [OrderStatus::Paid, OrderStatus::Cancelled, OrderStatus::New] {
            let err = repo.set_status(id, status, None).await.unwrap_err();
            assert_eq!(err.kind(), ErrorCode::InvalidState, "status {status}");
        }
        assert_eq!(repo.get(id).unwrap().status, OrderStatus::New);
        assert!(repo.set_status(OrderId::new(7), OrderStatus::Failed, None).await.unwrap_err().is_not_found());
    }
}
