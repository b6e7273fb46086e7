// crates/loms/tests/common/setup_postgres_test_db.rs

use loms::infrastructure::postgres::LOMS_MIGRATIONS;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use sqlx::PgPool;

/// Kernel outbox table plus the loms schema.
pub async fn setup_postgres_test_db() -> PostgresTestContext {
    PostgresTestContext::builder()
        .with_migrations(&[LOMS_MIGRATIONS])
        .build()
        .await
}

pub async fn seed_stock(pool: &PgPool, sku: i64, total_count: i64, reserved: i64) {
    sqlx::query("INSERT INTO stocks (sku, total_count, reserved) VALUES ($1, $2, $3)")
        .bind(sku)
        .bind(total_count)
        .bind(reserved)
        .execute(pool)
        .await
        .expect("Failed to seed stock");
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
