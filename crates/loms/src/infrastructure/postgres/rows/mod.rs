// crates/loms/src/infrastructure/postgres/rows/mod.rs

mod postgres_order_row;
mod postgres_stock_row;

pub use postgres_order_row::{group_order_rows, PostgresOrderItemRow, PostgresOrderListRow, PostgresOrderRow};
pub use postgres_stock_row::PostgresStockRow;
