// crates/loms/src/infrastructure/postgres/rows/postgres_stock_row.rs

use sqlx::FromRow;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::entities::Stock;
use crate::domain::value_objects::Sku;

#[derive(Debug, FromRow)]
pub struct PostgresStockRow {
    pub sku: i64,
    pub total_count: i64,
    pub reserved: i64,
}

impl TryFrom<PostgresStockRow> for Stock {
    type Error = DomainError;

    fn try_from(row: PostgresStockRow) -> Result<Self> {
        let corrupt = |field: &str, value: i64| DomainError::Internal(format!("stored {field} {value} out of range"));

        let sku = u32::try_from(row.sku).map_err(|_| corrupt("sku", row.sku))?;
        let total = u64::try_from(row.total_count).map_err(|_| corrupt("total_count", row.total_count))?;
        let reserved = u64::try_from(row.reserved).map_err(|_| corrupt("reserved", row.reserved))?;
        Stock::new(Sku::new(sku), total, reserved)
    }
}
