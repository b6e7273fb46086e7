// crates/loms/src/infrastructure/postgres/repositories/postgres_stock_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::balancer::PgBalancer;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::domain::entities::Stock;
use crate::domain::repositories::StockRepository;
use crate::domain::value_objects::Sku;
use crate::infrastructure::postgres::rows::PostgresStockRow;

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Reserve,
    Remove,
    Cancel,
}

/// Stock counters. Every mutation is one guarded `UPDATE`, so concurrent callers
/// serialize on the row lock and the guard is re-evaluated against the committed value.
#[derive(Clone)]
pub struct PostgresStockRepository {
    db: PgBalancer,
}

impl PostgresStockRepository {
    pub fn new(db: PgBalancer) -> Self {
        Self { db }
    }

    async fn apply(&self, sql: &'static str, mutation: Mutation, sku: Sku, count: u32) -> Result<()> {
        let updated: Option<i64> = sqlx::query_scalar(sql)
            .bind(sku.value() as i64)
            .bind(count as i64)
            .fetch_optional(self.db.primary())
            .await
            .map_domain::<Stock>(sku)?;

        match updated {
            Some(reserved) => {
                tracing::debug!(%sku, count, reserved, ?mutation, "stock updated");
                Ok(())
            }
            None => Err(self.explain_miss(mutation, sku, count).await?),
        }
    }

    /// The guarded update touched no row: tell an unknown sku from a shortfall.
    async fn explain_miss(&self, mutation: Mutation, sku: Sku, count: u32) -> Result<DomainError> {
        let row = sqlx::query_as::<_, PostgresStockRow>(
            "SELECT sku, total_count, reserved FROM stocks WHERE sku = $1",
        )
        .bind(sku.value() as i64)
        .fetch_optional(self.db.primary())
        .await
        .map_domain::<Stock>(sku)?;

        let Some(row) = row else {
            return Ok(Stock::not_found(sku));
        };
        let stock = Stock::try_from(row)?;
        let item = format!("sku {}", sku);

        Ok(match mutation {
            Mutation::Reserve => DomainError::InsufficientStock {
                item,
                requested: count as u64,
                available: stock.available(),
            },
            Mutation::Remove | Mutation::Cancel => DomainError::InsufficientReserved {
                item,
                requested: count as u64,
                reserved: stock.reserved,
            },
        })
    }
}

#[async_trait]
impl StockRepository for PostgresStockRepository {
    async fn reserve(&self, sku: Sku, count: u32) -> Result<()> {
        self.apply(
            r#"
            UPDATE stocks SET reserved = reserved + $2
            WHERE sku = $1 AND total_count - reserved >= $2
            RETURNING reserved
            "#,
            Mutation::Reserve,
            sku,
            count,
        )
        .await
    }

    async fn reserve_remove(&self, sku: Sku, count: u32) -> Result<()> {
        self.apply(
            r#"
            UPDATE stocks SET reserved = reserved - $2, total_count = total_count - $2
            WHERE sku = $1 AND reserved >= $2
            RETURNING reserved
            "#,
            Mutation::Remove,
            sku,
            count,
        )
        .await
    }

    async fn reserve_cancel(&self, sku: Sku, count: u32) -> Result<()> {
        self.apply(
            r#"
            UPDATE stocks SET reserved = reserved - $2
            WHERE sku = $1 AND reserved >= $2
            RETURNING reserved
            "#,
            Mutation::Cancel,
            sku,
            count,
        )
        .await
    }

    async fn get_stocks_by_sku(&self, sku: Sku) -> Result<u64> {
        let sql = "SELECT total_count - reserved FROM stocks WHERE sku = $1";

        let available: Option<i64> = sqlx::query_scalar(sql)
            .bind(sku.value() as i64)
            .fetch_optional(self.db.route(sql))
            .await
            .map_domain::<Stock>(sku)?;

        Ok(available.map(|n| n.max(0) as u64).unwrap_or(0))
    }
}
