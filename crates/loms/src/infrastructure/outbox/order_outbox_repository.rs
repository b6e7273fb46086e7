// crates/loms/src/infrastructure/outbox/order_outbox_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use shared_kernel::domain::events::NewOutboxMessage;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{Result, ResultExt};
use crate::domain::entities::{NewOrder, Order};
use crate::domain::events::{EventHeaders, OrderEvent};
use crate::domain::repositories::{OrderRepository, OrderWriteHook};
use crate::domain::value_objects::{OrderId, OrderStatus};

/// Order repository that queues an order event with every status write.
///
/// The event row is written through the order write's own transaction, so the status
/// change and its event are committed or discarded together.
pub struct OrderOutboxRepository {
    inner: Arc<dyn OrderRepository>,
    outbox: Arc<dyn OutboxRepository>,
    topic: String,
}

impl OrderOutboxRepository {
    pub fn new(inner: Arc<dyn OrderRepository>, outbox: Arc<dyn OutboxRepository>, topic: impl Into<String>) -> Self {
        Self {
            inner,
            outbox,
            topic: topic.into(),
        }
    }

    fn hook<'a>(&'a self, next: Option<&'a dyn OrderWriteHook>) -> OutboxHook<'a> {
        OutboxHook {
            outbox: self.outbox.as_ref(),
            topic: &self.topic,
            next,
        }
    }
}

struct OutboxHook<'a> {
    outbox: &'a dyn OutboxRepository,
    topic: &'a str,
    next: Option<&'a dyn OrderWriteHook>,
}

#[async_trait]
impl OrderWriteHook for OutboxHook<'_> {
    async fn run(&self, tx: &mut dyn Transaction, order_id: OrderId, status: OrderStatus) -> Result<()> {
        let event = OrderEvent::new(order_id, status, Utc::now());
        let headers = EventHeaders::new(current_trace_id());
        let message = NewOutboxMessage::new(self.topic, event.to_bytes()?, headers.to_bytes()?);

        self.outbox
            .create(Some(&mut *tx), message)
            .await
            .with_operation("enqueue order event")?;

        if let Some(next) = self.next {
            next.run(tx, order_id, status).await?;
        }
        Ok(())
    }
}

/// Id of the active `tracing` span, empty outside of one.
fn current_trace_id() -> String {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
        .unwrap_or_default()
}

#[async_trait]
impl OrderRepository for OrderOutboxRepository {
    async fn create(&self, order: NewOrder, hook: Option<&dyn OrderWriteHook>) -> Result<OrderId> {
        self.inner.create(order, Some(&self.hook(hook))).await
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Order> {
        self.inner.find_by_id(id).await
    }

    async fn set_status(&self, id: OrderId, status: OrderStatus, hook: Option<&dyn OrderWriteHook>) -> Result<()> {
        self.inner.set_status(id, status, Some(&self.hook(hook))).await
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        self.inner.find_all().await
    }
}
