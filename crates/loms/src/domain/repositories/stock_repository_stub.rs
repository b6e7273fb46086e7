// crates/loms/src/domain/repositories/stock_repository_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Stock;
use crate::domain::repositories::StockRepository;
use crate::domain::value_objects::Sku;

/// In-memory stock. Each call mutates one `Stock` under the map lock, so calls are atomic.
#[derive(Default)]
pub struct StockRepositoryStub {
    pub stocks: Arc<Mutex<HashMap<Sku, Stock>>>,
    /// Returned by every method when set
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    /// Returned by `reserve_cancel` when set
    pub cancel_error: Mutex<Option<DomainError>>,
    /// Mutating calls, formatted as `"<op> sku <sku> x <count>"`
    pub calls: Mutex<Vec<String>>,
}

impl StockRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stock(&self, sku: u32, total_count: u64, reserved: u64) {
        let sku = Sku::new(sku);
        let stock = Stock::new(sku, total_count, reserved).unwrap();
        self.stocks.lock().unwrap().insert(sku, stock);
    }

    pub fn stock(&self, sku: u32) -> Option<Stock> {
        self.stocks.lock().unwrap().get(&Sku::new(sku)).copied()
    }

    pub fn fail_cancel_with(&self, error: DomainError) {
        *self.cancel_error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }

    fn mutate(&self, op: &str, sku: Sku, count: u32, f: impl FnOnce(&mut Stock, u64) -> Result<()>) -> Result<()> {
        self.calls.lock().unwrap().push(format!("{op} sku {sku} x {count}"));
        let mut stocks = self.stocks.lock().unwrap();
        let stock = stocks.get_mut(&sku).ok_or_else(|| Stock::not_found(sku))?;
        f(stock, u64::from(count))
    }
}

#[async_trait]
impl StockRepository for StockRepositoryStub {
    async fn reserve(&self, sku: Sku, count: u32) -> Result<()> {
        self.check_error()?;
        self.mutate("reserve", sku, count, Stock::reserve)
    }

    async fn reserve_remove(&self, sku: Sku, count: u32) -> Result<()> {
        self.check_error()?;
        self.mutate("remove", sku, count, Stock::reserve_remove)
    }

    async fn reserve_cancel(&self, sku: Sku, count: u32) -> Result<()> {
        self.check_error()?;
        if let Some(err) = self.cancel_error.lock().unwrap().clone() {
            self.calls.lock().unwrap().push(format!("cancel sku {sku} x {count}"));
            return Err(err);
        }
        self.mutate("cancel", sku, count, Stock::reserve_cancel)
    }

    async fn get_stocks_by_sku(&self, sku: Sku) -> Result<u64> {
        self.check_error()?;
        Ok(self.stocks.lock().unwrap().get(&sku).map(Stock::available).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_reservations_never_oversell() {
        let repo = Arc::new(StockRepositoryStub::new());
        repo.add_stock(1, 100, 0);

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let count = 1 + (i % 3);
                    repo.reserve(Sku::new(1), count).await.map(|_| count)
                })
            })
            .collect();

        let mut reserved = 0u64;
        for handle in handles {
            if let Ok(count) = handle.await.unwrap() {
                reserved += u64::from(count);
            }
        }

        let stock = repo.stock(1).unwrap();
        assert_eq!(stock.reserved, reserved);
        assert!(stock.reserved <= stock.total_count);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn mixed_operations_keep_reserved_within_bounds() {
        let repo = Arc::new(StockRepositoryStub::new());
        repo.add_stock(1, 50, 0);

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let sku = Sku::new(1);
                    let _ = match i % 3 {
                        0 => repo.reserve(sku, 2).await,
                        1 => repo.reserve_cancel(sku, 1).await,
                        _ => repo.reserve_remove(sku, 1).await,
                    };
                    let stock = repo.stock(1).unwrap();
                    assert!(stock.reserved <= stock.total_count);
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn unknown_sku_reads_zero_but_cannot_be_reserved() {
        let repo = StockRepositoryStub::new();
        assert_eq!(repo.get_stocks_by_sku(Sku::new(9)).await.unwrap(), 0);
        assert!(repo.reserve(Sku::new(9), 1).await.unwrap_err().is_not_found());
    }
}
