// crates/loms/src/domain/entities/order.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::{OrderId, OrderStatus, Sku, UserId};

/// One line of an order. Duplicate skus are independent lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub sku: Sku,
    pub count: u32,
}

impl OrderItem {
    pub fn new(sku: Sku, count: u32) -> Self {
        Self { sku, count }
    }
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sku {} x {}", self.sku, self.count)
    }
}

/// An order before the repository has assigned its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user: UserId,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl NewOrder {
    pub fn new(user: UserId, items: Vec<OrderItem>) -> Self {
        Self {
            user,
            status: OrderStatus::None,
            items,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

/// Persisted order. Items never change after creation; only `status` moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub user: UserId,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn ensure_status(&self, expected: OrderStatus) -> Result<()> {
        if self.status != expected {
            return Err(DomainError::InvalidState {
                entity: Self::entity_name(),
                id: self.id.to_string(),
                actual: self.status.as_str().to_string(),
                expected: expected.as_str().to_string(),
            });
        }
        Ok(())
    }

    /// Checks that `next` is a legal move from the current status.
    pub fn ensure_transition(&self, next: OrderStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(Self::transition_rejected(self.id, self.status, next));
        }
        Ok(())
    }

    /// Error for a status write whose current status may not move to `next`.
    pub fn transition_rejected(id: OrderId, actual: OrderStatus, next: OrderStatus) -> DomainError {
        DomainError::InvalidState {
            entity: Self::entity_name(),
            id: id.to_string(),
            actual: actual.as_str().to_string(),
            expected: format!("a status that can move to '{}'", next),
        }
    }
}

impl EntityMetadata for Order {
    fn entity_name() -> &'static str {
        "Order"
    }
}
