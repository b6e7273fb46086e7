// crates/shared-kernel/src/infrastructure/postgres/repositories/mod.rs

mod postgres_outbox_repository;

pub use postgres_outbox_repository::PostgresOutboxRepository;
