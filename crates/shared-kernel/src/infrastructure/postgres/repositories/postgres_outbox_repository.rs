// crates/shared-kernel/src/infrastructure/postgres/repositories/postgres_outbox_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use crate::domain::events::{NewOutboxMessage, OutboxMessage};
use crate::domain::repositories::OutboxRepository;
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};
use crate::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::infrastructure::postgres::rows::OutboxRow;

/// Outbox table of one database. Writes must land on the same primary as the order
/// write they accompany, so the pool given here is that primary.
#[derive(Clone)]
pub struct PostgresOutboxRepository {
    pool: PgPool,
}

impl PostgresOutboxRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OutboxRepository for PostgresOutboxRepository {
    async fn create(&self, tx: Option<&mut dyn Transaction>, message: NewOutboxMessage) -> Result<i64> {
        <dyn Transaction>::execute_on(&self.pool, tx, move |conn| {
            Box::pin(async move {
                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO outbox (topic, event, headers)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(&message.topic)
                .bind(&message.event)
                .bind(&message.headers)
                .fetch_one(&mut *conn)
                .await
                .map_domain_infra("Outbox.create")?;

                tracing::debug!(id, topic = %message.topic, "outbox row queued");
                Ok(id)
            })
        })
        .await
    }

    async fn get_wait_list(&self) -> Result<Vec<OutboxMessage>> {
        let rows = sqlx::query_as::<_, OutboxRow>(
            r#"
            SELECT id, topic, event, headers, created_at, completed_at
            FROM outbox
            WHERE completed_at IS NULL
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_domain_infra("Outbox.get_wait_list")?;

        Ok(rows.into_iter().map(OutboxMessage::from).collect())
    }

    async fn set_complete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE outbox SET completed_at = now() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_domain_infra("Outbox.set_complete")?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound { entity: "OutboxMessage", id: id.to_string() });
        }
        Ok(())
    }
}
