// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

use std::path::Path;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

pub const KERNEL_MIGRATIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations/postgres");

/// Applies every migration directory in order against one database.
/// Directories share the `_sqlx_migrations` table, so versions from other directories are ignored.
pub async fn apply_migrations(pool: &PgPool, dirs: &[String]) -> anyhow::Result<()> {
    for dir in dirs {
        let mut migrator = Migrator::new(Path::new(dir)).await?;
        migrator.set_ignore_missing(true);
        migrator.run(pool).await?;
        tracing::debug!(dir = %dir, "migrations applied");
    }
    Ok(())
}
