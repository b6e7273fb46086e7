// crates/shared-kernel/src/infrastructure/postgres/transactions/mod.rs

mod postgres_transaction;

pub use postgres_transaction::{PostgresTransaction, TransactionExt};
