// crates/shared-kernel/src/infrastructure/postgres/balancer/pg_balancer.rs

use rand::Rng;
use sqlx::PgPool;
use crate::errors::Result;
use crate::infrastructure::postgres::transactions::PostgresTransaction;

/// Primary/replica pair. Writes go to the primary; reads are spread over both pools.
///
/// Replica reads may be stale. Code that must see its own writes reads through
/// [`PgBalancer::primary`] or inside a transaction.
#[derive(Clone, Debug)]
pub struct PgBalancer {
    primary: PgPool,
    replica: PgPool,
}

impl PgBalancer {
    pub fn new(primary: PgPool, replica: PgPool) -> Self {
        Self { primary, replica }
    }

    /// Both roles served by one pool.
    pub fn single(pool: PgPool) -> Self {
        Self { primary: pool.clone(), replica: pool }
    }

    pub fn primary(&self) -> &PgPool {
        &self.primary
    }

    pub fn replica(&self) -> &PgPool {
        &self.replica
    }

    /// One of the two pools, picked at random.
    pub fn read_pool(&self) -> &PgPool {
        if rand::rng().random_bool(0.5) {
            &self.primary
        } else {
            &self.replica
        }
    }

    pub fn route(&self, sql: &str) -> &PgPool {
        if is_sql_write(sql) {
            &self.primary
        } else {
            self.read_pool()
        }
    }

    /// Transactions always run on the primary.
    pub async fn begin(&self) -> Result<PostgresTransaction> {
        PostgresTransaction::begin(&self.primary).await
    }
}

pub fn is_sql_write(sql: &str) -> bool {
    let upper = sql.to_ascii_uppercase();
    ["INSERT", "UPDATE", "DELETE"].iter().any(|kw| upper.contains(kw))
}
