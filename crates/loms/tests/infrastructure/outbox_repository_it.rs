// crates/loms/tests/infrastructure/outbox_repository_it.rs

use shared_kernel::domain::events::NewOutboxMessage;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::errors::ErrorCode;
use shared_kernel::infrastructure::postgres::repositories::PostgresOutboxRepository;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransaction;
use crate::common::setup_postgres_test_db;

fn message(n: u8) -> NewOutboxMessage {
    NewOutboxMessage::new("loms.order-events", vec![n], vec![])
}

#[tokio::test]
async fn test_wait_list_lifecycle() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresOutboxRepository::new(ctx.pool());

    let first = repo.create(None, message(1)).await.unwrap();
    let second = repo.create(None, message(2)).await.unwrap();

    let pending = repo.get_wait_list().await.unwrap();
    assert_eq!(pending.iter().map(|m| m.id).collect::<Vec<_>>(), vec![first, second]);
    assert_eq!(pending[0].event, vec![1]);

    repo.set_complete(first).await.unwrap();

    let pending = repo.get_wait_list().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second);
}

#[tokio::test]
async fn test_complete_unknown_row() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresOutboxRepository::new(ctx.pool());

    assert_eq!(repo.set_complete(999).await.unwrap_err().kind(), ErrorCode::NotFound);
}

#[tokio::test]
async fn test_create_joins_caller_transaction() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresOutboxRepository::new(ctx.pool());

    let mut tx = PostgresTransaction::begin(&ctx.pool()).await.unwrap();
    repo.create(Some(&mut tx), message(1)).await.unwrap();
    tx.rollback().await.unwrap();
    assert!(repo.get_wait_list().await.unwrap().is_empty());

    let mut tx = PostgresTransaction::begin(&ctx.pool()).await.unwrap();
    repo.create(Some(&mut tx), message(2)).await.unwrap();
    assert!(repo.get_wait_list().await.unwrap().is_empty());
    tx.commit().await.unwrap();
    assert_eq!(repo.get_wait_list().await.unwrap().len(), 1);
}
