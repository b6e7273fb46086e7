// crates/loms/src/infrastructure/postgres/repositories/mod.rs

mod postgres_order_repository;
mod postgres_stock_repository;

pub use postgres_order_repository::PostgresOrderRepository;
pub use postgres_stock_repository::PostgresStockRepository;
