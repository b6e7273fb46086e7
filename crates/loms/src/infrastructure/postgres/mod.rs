// crates/loms/src/infrastructure/postgres/mod.rs

pub mod repositories;
pub mod rows;

/// Absolute path of the loms schema migrations.
pub const LOMS_MIGRATIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations/postgres");
