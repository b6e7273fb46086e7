// crates/loms/src/infrastructure/api/dto/requests.rs

use serde::{Deserialize, Serialize};
use shared_kernel::application::Validate;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
    pub sku: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreateRequest {
    pub user: i64,
    pub items: Vec<ItemDto>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderInfoRequest {
    pub order_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderPayRequest {
    pub order_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderCancelRequest {
    pub order_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StocksInfoRequest {
    pub sku: u32,
}

/// Administrative listing takes no input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OrderListRequest {}

fn positive(field: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            reason: format!("must be positive, got {value}"),
        });
    }
    Ok(())
}

impl Validate for ItemDto {
    fn validate(&self) -> Result<()> {
        positive("sku", self.sku as i64)?;
        positive("count", self.count as i64)
    }
}

impl Validate for OrderCreateRequest {
    fn validate(&self) -> Result<()> {
        positive("user", self.user)?;
        if self.items.is_empty() {
            return Err(DomainError::Validation {
                field: "items",
                reason: "order must contain at least one item".into(),
            });
        }
        self.items.iter().try_for_each(Validate::validate)
    }
}

impl Validate for OrderInfoRequest {
    fn validate(&self) -> Result<()> {
        positive("order_id", self.order_id)
    }
}

impl Validate for OrderPayRequest {
    fn validate(&self) -> Result<()> {
        positive("order_id", self.order_id)
    }
}

impl Validate for OrderCancelRequest {
    fn validate(&self) -> Result<()> {
        positive("order_id", self.order_id)
    }
}

impl Validate for StocksInfoRequest {
    fn validate(&self) -> Result<()> {
        positive("sku", self.sku as i64)
    }
}

impl Validate for OrderListRequest {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
