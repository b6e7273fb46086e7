// crates/loms/src/domain/value_objects/order_status.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};

/// Order lifecycle.
///
/// `New -> AwaitingPayment -> {Paid | Cancelled}`, and `New -> Failed` while creating.
/// `None` is the unset value and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "new")]
    New,
    #[serde(rename = "awaiting payment")]
    AwaitingPayment,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "payed")]
    Paid,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::New => "new",
            Self::AwaitingPayment => "awaiting payment",
            Self::Failed => "failed",
            Self::Paid => "payed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Paid | Self::Cancelled)
    }

    pub const ALL: [OrderStatus; 6] = [
        Self::None,
        Self::New,
        Self::AwaitingPayment,
        Self::Failed,
        Self::Paid,
        Self::Cancelled,
    ];

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::New, Self::AwaitingPayment)
                | (Self::New, Self::Failed)
                | (Self::AwaitingPayment, Self::Paid)
                | (Self::AwaitingPayment, Self::Cancelled)
        )
    }

    /// Statuses a stored order must have for a write of `self` to apply.
    pub fn predecessors(self) -> Vec<OrderStatus> {
        Self::ALL.into_iter().filter(|from| from.can_transition_to(self)).collect()
    }

    /// Status a freshly created order is stored with.
    pub fn or_new(self) -> Self {
        match self {
            Self::None => Self::New,
            other => other,
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(Self::None),
            "new" => Ok(Self::New),
            "awaiting payment" => Ok(Self::AwaitingPayment),
            "failed" => Ok(Self::Failed),
            "payed" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::Validation {
                field: "status",
                reason: format!("unknown order status '{other}'"),
            }),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
