// crates/loms/src/domain/repositories/stock_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use crate::domain::value_objects::Sku;

/// Reservation primitives. Each call is atomic per sku; none of them retries.
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Holds `count` units. Unknown sku is `NotFound`; a shortfall is `InsufficientStock`.
    async fn reserve(&self, sku: Sku, count: u32) -> Result<()>;

    /// Turns a hold into a sale: both `reserved` and `total_count` drop by `count`.
    async fn reserve_remove(&self, sku: Sku, count: u32) -> Result<()>;

    /// Releases a hold.
    async fn reserve_cancel(&self, sku: Sku, count: u32) -> Result<()>;

    /// Available quantity; `0` for an unknown sku.
    async fn get_stocks_by_sku(&self, sku: Sku) -> Result<u64>;
}
