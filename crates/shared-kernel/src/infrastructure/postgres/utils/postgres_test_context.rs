// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context.rs

use sqlx::{Executor, PgPool};
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres as PostgresImage;
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContext};
use crate::infrastructure::postgres::utils::{apply_migrations, PostgresTestContextBuilder};

/// Disposable Postgres in a container, migrated and ready.
/// Extra databases on the same server stand in for additional shards.
pub struct PostgresTestContext {
    context: PostgresContext,
    base_url: String,
    migrations: Vec<String>,
    config: PostgresConfig,
    _container: ContainerAsync<PostgresImage>,
}

impl PostgresTestContext {
    pub fn builder() -> PostgresTestContextBuilder {
        PostgresTestContextBuilder::new()
    }

    pub async fn restore(builder: PostgresTestContextBuilder) -> Self {
        let container = PostgresImage::default()
            .with_user(&builder.user)
            .with_password(&builder.password)
            .with_db_name(&builder.db_name)
            .with_name(&builder.image_name)
            .with_tag(&builder.image_tag)
            .start()
            .await
            .expect("Failed to start postgres container");

        let host_port = container.get_host_port_ipv4(5432).await.expect("postgres port");
        let base_url = format!("postgres://{}:{}@127.0.0.1:{}", builder.user, builder.password, host_port);
        let config = builder.config.unwrap_or_default();
        let migrations = builder.migration_dirs();

        let context = PostgresContext::builder()
            .with_url(format!("{}/{}", base_url, builder.db_name))
            .with_config(config)
            .build()
            .await
            .expect("Failed to build context");

        apply_migrations(&context.pool(), &migrations).await.expect("Failed to apply migrations");

        Self {
            context,
            base_url,
            migrations,
            config,
            _container: container,
        }
    }

    pub fn pool(&self) -> PgPool {
        self.context.pool()
    }

    pub fn url(&self) -> &str {
        self.context.url()
    }

    /// Creates a sibling database with the same migrations and returns a pool on it.
    pub async fn create_database(&self, name: &str) -> PgPool {
        self.pool()
            .execute(format!("CREATE DATABASE {name}").as_str())
            .await
            .expect("Failed to create database");

        let context = PostgresContext::builder()
            .with_url(format!("{}/{}", self.base_url, name))
            .with_config(self.config)
            .build()
            .await
            .expect("Failed to build context");
        let pool = context.pool();

        apply_migrations(&pool, &self.migrations).await.expect("Failed to apply migrations");
        pool
    }
}
