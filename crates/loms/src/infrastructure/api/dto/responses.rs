// crates/loms/src/infrastructure/api/dto/responses.rs

use serde::{Deserialize, Serialize};
use super::ItemDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreateResponse {
    pub order_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfoResponse {
    pub status: String,
    pub user: i64,
    pub items: Vec<ItemDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StocksInfoResponse {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummaryDto {
    pub order_id: i64,
    pub status: String,
    pub user: i64,
    pub items: Vec<ItemDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderSummaryDto>,
}
