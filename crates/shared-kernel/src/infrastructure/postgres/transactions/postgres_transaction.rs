// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction.rs

use std::future::Future;
use std::pin::Pin;
use sqlx::{PgConnection, PgPool, Postgres, Transaction as PostgresTx};
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};
use crate::infrastructure::postgres::mappers::SqlxErrorExt;

/// Postgres unit of work. Dropping it without `commit` rolls back.
pub struct PostgresTransaction {
    inner: PostgresTx<'static, Postgres>,
}

impl PostgresTransaction {
    pub fn new(tx: PostgresTx<'static, Postgres>) -> Self {
        Self { inner: tx }
    }

    pub async fn begin(pool: &PgPool) -> Result<Self> {
        let tx = pool.begin().await.map_domain_infra("Failed to begin transaction")?;
        Ok(Self::new(tx))
    }

    pub async fn commit(self) -> Result<()> {
        self.inner.commit().await.map_domain_infra("Failed to commit transaction")
    }

    pub async fn rollback(self) -> Result<()> {
        self.inner.rollback().await.map_domain_infra("Failed to roll back transaction")
    }

    pub fn get_mut(&mut self) -> &mut PostgresTx<'static, Postgres> {
        &mut self.inner
    }
}

impl Transaction for PostgresTransaction {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl dyn Transaction + '_ {
    /// Runs `f` on the caller's transaction when one is given, on a pooled connection otherwise.
    pub async fn execute_on<'a, F, T>(
        pool: &PgPool,
        tx: Option<&'a mut dyn Transaction>,
        f: F,
    ) -> Result<T>
    where
        F: for<'b> FnOnce(&'b mut PgConnection) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'b>> + Send,
    {
        match tx {
            Some(t) => {
                let sqlx_tx = t.downcast_mut_sqlx()?;
                f(&mut **sqlx_tx).await
            }
            None => {
                let mut conn = pool.acquire().await.map_domain_infra("Pool acquisition failed")?;
                f(&mut *conn).await
            }
        }
    }
}

pub trait TransactionExt {
    fn downcast_mut_sqlx(&mut self) -> Result<&mut PostgresTx<'static, Postgres>>;
}

impl TransactionExt for dyn Transaction + '_ {
    fn downcast_mut_sqlx(&mut self) -> Result<&mut PostgresTx<'static, Postgres>> {
        self.as_any_mut()
            .downcast_mut::<PostgresTransaction>()
            .map(|tx| tx.get_mut())
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected PostgresTransaction".into()))
    }
}
