// crates/loms/src/domain/entities/stock.rs

use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::Sku;

/// Stock counters of one sku. Always `reserved <= total_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub sku: Sku,
    pub total_count: u64,
    pub reserved: u64,
}

impl Stock {
    pub fn new(sku: Sku, total_count: u64, reserved: u64) -> Result<Self> {
        if reserved > total_count {
            return Err(DomainError::Validation {
                field: "reserved",
                reason: format!("{reserved} exceeds total count {total_count}"),
            });
        }
        Ok(Self { sku, total_count, reserved })
    }

    pub fn available(&self) -> u64 {
        self.total_count - self.reserved
    }

    pub fn reserve(&mut self, count: u64) -> Result<()> {
        if self.available() < count {
            return Err(DomainError::InsufficientStock {
                item: format!("sku {}", self.sku),
                requested: count,
                available: self.available(),
            });
        }
        self.reserved += count;
        Ok(())
    }

    /// Finalizes a sale: the held quantity leaves the stock.
    pub fn reserve_remove(&mut self, count: u64) -> Result<()> {
        self.ensure_reserved(count)?;
        self.reserved -= count;
        self.total_count -= count;
        Ok(())
    }

    /// Releases a hold.
    pub fn reserve_cancel(&mut self, count: u64) -> Result<()> {
        self.ensure_reserved(count)?;
        self.reserved -= count;
        Ok(())
    }

    fn ensure_reserved(&self, count: u64) -> Result<()> {
        if self.reserved < count {
            return Err(DomainError::InsufficientReserved {
                item: format!("sku {}", self.sku),
                requested: count,
                reserved: self.reserved,
            });
        }
        Ok(())
    }
}

impl EntityMetadata for Stock {
    fn entity_name() -> &'static str {
        "Stock"
    }
}
