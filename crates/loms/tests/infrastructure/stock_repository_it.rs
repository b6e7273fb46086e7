// crates/loms/tests/infrastructure/stock_repository_it.rs

use std::sync::Arc;
use loms::domain::repositories::StockRepository;
use loms::domain::value_objects::Sku;
use loms::infrastructure::postgres::repositories::PostgresStockRepository;
use shared_kernel::errors::ErrorCode;
use shared_kernel::infrastructure::postgres::balancer::PgBalancer;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use crate::common::{seed_stock, setup_postgres_test_db};

async fn setup_context() -> (Arc<PostgresStockRepository>, PostgresTestContext) {
    let ctx = setup_postgres_test_db().await;
    let repo = Arc::new(PostgresStockRepository::new(PgBalancer::single(ctx.pool())));
    (repo, ctx)
}

async fn counters(ctx: &PostgresTestContext, sku: i64) -> (i64, i64) {
    sqlx::query_as("SELECT total_count, reserved FROM stocks WHERE sku = $1")
        .bind(sku)
        .fetch_one(&ctx.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_reserve_remove_cancel_lifecycle() {
    let (repo, ctx) = setup_context().await;
    seed_stock(&ctx.pool(), 1, 10, 0).await;
    let sku = Sku::new(1);

    repo.reserve(sku, 4).await.unwrap();
    assert_eq!(counters(&ctx, 1).await, (10, 4));
    assert_eq!(repo.get_stocks_by_sku(sku).await.unwrap(), 6);

    repo.reserve_remove(sku, 3).await.unwrap();
    assert_eq!(counters(&ctx, 1).await, (7, 1));

    repo.reserve_cancel(sku, 1).await.unwrap();
    assert_eq!(counters(&ctx, 1).await, (7, 0));
    assert_eq!(repo.get_stocks_by_sku(sku).await.unwrap(), 7);
}

#[tokio::test]
async fn test_shortfalls_leave_row_untouched() {
    let (repo, ctx) = setup_context().await;
    seed_stock(&ctx.pool(), 1, 5, 2).await;
    let sku = Sku::new(1);

    let err = repo.reserve(sku, 4).await.unwrap_err();
    assert_eq!(err.kind(), ErrorCode::InsufficientStock);

    let err = repo.reserve_remove(sku, 3).await.unwrap_err();
    assert_eq!(err.kind(), ErrorCode::InsufficientStock);

    let err = repo.reserve_cancel(sku, 3).await.unwrap_err();
    assert_eq!(err.kind(), ErrorCode::InsufficientStock);

    assert_eq!(counters(&ctx, 1).await, (5, 2));
}

#[tokio::test]
async fn test_unknown_sku() {
    let (repo, _ctx) = setup_context().await;
    let sku = Sku::new(404);

    assert_eq!(repo.reserve(sku, 1).await.unwrap_err().kind(), ErrorCode::NotFound);
    assert_eq!(repo.reserve_cancel(sku, 1).await.unwrap_err().kind(), ErrorCode::NotFound);
    assert_eq!(repo.get_stocks_by_sku(sku).await.unwrap(), 0);
}

#[tokio::test]
async fn test_concurrent_reservations_never_oversell() {
    let (repo, ctx) = setup_context().await;
    seed_stock(&ctx.pool(), 7, 10, 0).await;

    let tasks: Vec<_> = (0..25)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.reserve(Sku::new(7), 1).await })
        })
        .collect();

    let mut succeeded = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => succeeded += 1,
            Err(e) => assert_eq!(e.kind(), ErrorCode::InsufficientStock),
        }
    }

    assert_eq!(succeeded, 10);
    assert_eq!(counters(&ctx, 7).await, (10, 10));
}

#[tokio::test]
async fn test_concurrent_mixed_mutations_keep_bounds() {
    let (repo, ctx) = setup_context().await;
    seed_stock(&ctx.pool(), 3, 20, 10).await;

    let tasks: Vec<_> = (0..30)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                let sku = Sku::new(3);
                match i % 3 {
                    0 => repo.reserve(sku, 2).await,
                    1 => repo.reserve_cancel(sku, 1).await,
                    _ => repo.reserve_remove(sku, 1).await,
                }
            })
        })
        .collect();

    for task in tasks {
        let _ = task.await.unwrap();
    }

    let (total, reserved) = counters(&ctx, 3).await;
    assert!(reserved >= 0 && reserved <= total, "reserved {reserved} outside [0, {total}]");
}
