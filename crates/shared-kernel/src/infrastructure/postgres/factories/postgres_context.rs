// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContextBuilder};

pub struct PostgresContext {
    pool: PgPool,
    url: String,
    config: PostgresConfig,
}

impl PostgresContext {
    pub fn builder() -> PostgresContextBuilder {
        PostgresContextBuilder::default()
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> PostgresConfig {
        self.config
    }

    pub(crate) async fn restore(builder: PostgresContextBuilder) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(builder.config.max_connections)
            .min_connections(builder.config.min_connections)
            .acquire_timeout(builder.config.connect_timeout)
            .connect(&builder.url)
            .await
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, format!("Postgres connection failed: {}", e)))?;

        tracing::debug!(max = builder.config.max_connections, "postgres pool ready");

        Ok(Self {
            pool,
            url: builder.url,
            config: builder.config,
        })
    }
}
