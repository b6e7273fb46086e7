// crates/loms/src/application/get_stocks_info/get_stocks_info_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::{Result, ResultExt};

use crate::application::get_stocks_info::GetStocksInfoQuery;
use crate::domain::repositories::StockRepository;

pub struct GetStocksInfoUseCase {
    stock_repo: Arc<dyn StockRepository>,
}

impl GetStocksInfoUseCase {
    pub fn new(stock_repo: Arc<dyn StockRepository>) -> Self {
        Self { stock_repo }
    }

    /// Units available for reservation.
    pub async fn execute(&self, query: GetStocksInfoQuery) -> Result<u64> {
        self.stock_repo
            .get_stocks_by_sku(query.sku)
            .await
            .with_operation("stock_repository.get_stocks_by_sku")
    }
}
