// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context_builder.rs

use crate::infrastructure::postgres::factories::PostgresConfig;
use crate::infrastructure::postgres::utils::{PostgresTestContext, KERNEL_MIGRATIONS};

pub struct PostgresTestContextBuilder {
    pub(crate) image_name: String,
    pub(crate) image_tag: String,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) db_name: String,
    pub(crate) migrations: Vec<String>,
    pub(crate) run_kernel_migrations: bool,
    pub(crate) config: Option<PostgresConfig>,
}

impl Default for PostgresTestContextBuilder {
    fn default() -> Self {
        Self {
            image_name: "postgres".to_string(),
            image_tag: "16-alpine".to_string(),
            user: "test".to_string(),
            password: "test".to_string(),
            db_name: "test_db".to_string(),
            migrations: Vec::new(),
            run_kernel_migrations: true,
            config: None,
        }
    }
}

impl PostgresTestContextBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Absolute migration directories, applied after the kernel's own.
    pub fn with_migrations(mut self, paths: &[&str]) -> Self {
        self.migrations = paths.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn skip_kernel_migrations(mut self) -> Self {
        self.run_kernel_migrations = false;
        self
    }

    pub fn with_image(mut self, name: &str, tag: &str) -> Self {
        self.image_name = name.to_string();
        self.image_tag = tag.to_string();
        self
    }

    pub fn with_config(mut self, config: PostgresConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub(crate) fn migration_dirs(&self) -> Vec<String> {
        let mut dirs = Vec::new();
        if self.run_kernel_migrations {
            dirs.push(KERNEL_MIGRATIONS.to_string());
        }
        dirs.extend(self.migrations.iter().cloned());
        dirs
    }

    pub async fn build(self) -> PostgresTestContext {
        PostgresTestContext::restore(self).await
    }
}
