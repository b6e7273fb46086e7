// crates/loms/src/application/get_stocks_info/get_stocks_info_query.rs

use serde::Deserialize;
use crate::domain::value_objects::Sku;

#[derive(Debug, Deserialize, Clone)]
pub struct GetStocksInfoQuery {
    pub sku: Sku,
}
