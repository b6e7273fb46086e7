// crates/loms/tests/infrastructure/order_repository_it.rs

use std::sync::Arc;
use async_trait::async_trait;
use loms::domain::entities::{NewOrder, OrderItem};
use loms::domain::repositories::{OrderRepository, OrderWriteHook};
use loms::domain::value_objects::{OrderId, OrderStatus, Sku, UserId};
use loms::infrastructure::postgres::repositories::PostgresOrderRepository;
use shared_kernel::domain::events::NewOutboxMessage;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, ErrorCode, Result};
use shared_kernel::infrastructure::postgres::balancer::PgBalancer;
use shared_kernel::infrastructure::postgres::repositories::PostgresOutboxRepository;
use shared_kernel::infrastructure::postgres::sharding::{ShardManager, SHARD_ID_SPACE};
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use sqlx::PgPool;
use crate::common::{count_rows, setup_postgres_test_db};

fn repo_over(pools: &[PgPool]) -> PostgresOrderRepository {
    let shards = pools.iter().cloned().map(PgBalancer::single).collect();
    PostgresOrderRepository::new(Arc::new(ShardManager::with_murmur3(shards)))
}

async fn setup_context() -> (PostgresOrderRepository, PostgresTestContext) {
    let ctx = setup_postgres_test_db().await;
    (repo_over(&[ctx.pool()]), ctx)
}

fn order(user: i64, items: &[(u32, u32)]) -> NewOrder {
    NewOrder::new(
        UserId::new(user),
        items.iter().map(|(sku, count)| OrderItem::new(Sku::new(*sku), *count)).collect(),
    )
}

/// Queues an outbox row in the order's transaction, then fails.
struct FailingAfterOutboxHook {
    outbox: PostgresOutboxRepository,
}

#[async_trait]
impl OrderWriteHook for FailingAfterOutboxHook {
    async fn run(&self, tx: &mut dyn Transaction, order_id: OrderId, _status: OrderStatus) -> Result<()> {
        let message = NewOutboxMessage::new("loms.order-events", order_id.to_string().into_bytes(), b"{}".to_vec());
        self.outbox.create(Some(tx), message).await?;
        Err(DomainError::Infrastructure("hook failed".into()))
    }
}

#[tokio::test]
async fn test_create_and_find_keep_item_order() {
    let (repo, _ctx) = setup_context().await;

    let id = repo.create(order(1, &[(5, 2), (1, 1), (5, 3)]), None).await.unwrap();
    let stored = repo.find_by_id(id).await.unwrap();

    assert_eq!(stored.user, UserId::new(1));
    assert_eq!(stored.status, OrderStatus::New);
    assert_eq!(
        stored.items,
        vec![
            OrderItem::new(Sku::new(5), 2),
            OrderItem::new(Sku::new(1), 1),
            OrderItem::new(Sku::new(5), 3),
        ]
    );
    assert_eq!(id.value() % SHARD_ID_SPACE, 0);
}

#[tokio::test]
async fn test_set_status_and_unknown_ids() {
    let (repo, _ctx) = setup_context().await;
    let id = repo.create(order(1, &[(1, 1)]).with_status(OrderStatus::New), None).await.unwrap();

    repo.set_status(id, OrderStatus::AwaitingPayment, None).await.unwrap();
    assert_eq!(repo.find_by_id(id).await.unwrap().status, OrderStatus::AwaitingPayment);

    let missing = OrderId::new(id.value() + SHARD_ID_SPACE * 100);
    assert_eq!(repo.find_by_id(missing).await.unwrap_err().kind(), ErrorCode::NotFound);
    assert_eq!(
        repo.set_status(missing, OrderStatus::Paid, None).await.unwrap_err().kind(),
        ErrorCode::NotFound
    );

    // shard 7 is not configured
    let off_shard = OrderId::new(SHARD_ID_SPACE + 7);
    assert_eq!(repo.find_by_id(off_shard).await.unwrap_err().kind(), ErrorCode::NotFound);
}

#[tokio::test]
async fn test_status_write_requires_an_allowed_predecessor() {
    let (repo, _ctx) = setup_context().await;
    let id = repo.create(order(1, &[(1, 1)]), None).await.unwrap();

    let err = repo.set_status(id, OrderStatus::Paid, None).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidState { ref actual, .. } if actual == "new"));
    assert_eq!(repo.find_by_id(id).await.unwrap().status, OrderStatus::New);

    repo.set_status(id, OrderStatus::AwaitingPayment, None).await.unwrap();
    repo.set_status(id, OrderStatus::Paid, None).await.unwrap();
    for status in [OrderStatus::Paid, OrderStatus::Cancelled] {
        let err = repo.set_status(id, status, None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorCode::InvalidState, "status {status}");
    }
    assert_eq!(repo.find_by_id(id).await.unwrap().status, OrderStatus::Paid);
}

#[tokio::test]
async fn test_concurrent_status_writers_apply_once() {
    let (repo, _ctx) = setup_context().await;
    let id = repo.create(order(1, &[(1, 1)]), None).await.unwrap();
    repo.set_status(id, OrderStatus::AwaitingPayment, None).await.unwrap();

    let (paid, cancelled) = tokio::join!(
        repo.set_status(id, OrderStatus::Paid, None),
        repo.set_status(id, OrderStatus::Cancelled, None),
    );

    let outcomes = [paid, cancelled];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    let err = outcomes.iter().find_map(|r| r.as_ref().err()).unwrap();
    assert_eq!(err.kind(), ErrorCode::InvalidState);
    let status = repo.find_by_id(id).await.unwrap().status;
    assert!(matches!(status, OrderStatus::Paid | OrderStatus::Cancelled));
}

#[tokio::test]
async fn test_failing_hook_persists_nothing() {
    let (repo, ctx) = setup_context().await;
    let hook = FailingAfterOutboxHook { outbox: PostgresOutboxRepository::new(ctx.pool()) };

    let err = repo.create(order(1, &[(1, 1), (2, 2)]), Some(&hook)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorCode::InfrastructureFailure);
    assert_eq!(count_rows(&ctx.pool(), "orders").await, 0);
    assert_eq!(count_rows(&ctx.pool(), "order_items").await, 0);
    assert_eq!(count_rows(&ctx.pool(), "outbox").await, 0);
}

#[tokio::test]
async fn test_failing_hook_keeps_previous_status() {
    let (repo, ctx) = setup_context().await;
    let id = repo.create(order(1, &[(1, 1)]), None).await.unwrap();
    let hook = FailingAfterOutboxHook { outbox: PostgresOutboxRepository::new(ctx.pool()) };

    assert!(repo.set_status(id, OrderStatus::Failed, Some(&hook)).await.is_err());

    assert_eq!(repo.find_by_id(id).await.unwrap().status, OrderStatus::New);
    assert_eq!(count_rows(&ctx.pool(), "outbox").await, 0);
}

#[tokio::test]
async fn test_orders_route_to_the_shard_encoded_in_their_id() {
    let ctx = setup_postgres_test_db().await;
    let second = ctx.create_database("loms_shard_1").await;
    let pools = vec![ctx.pool(), second];
    let repo = repo_over(&pools);

    let mut ids = Vec::new();
    for user in 1..=20 {
        ids.push(repo.create(order(user, &[(1, 1)]), None).await.unwrap());
    }

    for id in &ids {
        let shard = (id.value() % SHARD_ID_SPACE) as usize;
        let stored: Option<i64> = sqlx::query_scalar("SELECT id FROM orders WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&pools[shard])
            .await
            .unwrap();
        assert_eq!(stored, Some(id.value()), "order {id} not on shard {shard}");
        assert!(repo.find_by_id(*id).await.is_ok());
    }

    let per_shard = [count_rows(&pools[0], "orders").await, count_rows(&pools[1], "orders").await];
    assert_eq!(per_shard[0] + per_shard[1], 20);
    assert!(per_shard.iter().all(|n| *n > 0), "murmur3 left a shard empty: {per_shard:?}");

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 20);
    assert!(all.windows(2).all(|w| w[0].id > w[1].id));
}
