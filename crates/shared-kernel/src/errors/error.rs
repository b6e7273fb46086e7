// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;
use crate::errors::{AppError, ErrorCode};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// The requested quantity exceeds what is available for reservation.
    #[error("Insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: u64,
        available: u64,
    },

    /// Consuming or releasing more than is currently held.
    #[error("Insufficient reserved stock for {item}: requested {requested}, reserved {reserved}")]
    InsufficientReserved {
        item: String,
        requested: u64,
        reserved: u64,
    },

    #[error("{entity} '{id}' is '{actual}', expected '{expected}'")]
    InvalidState {
        entity: &'static str,
        id: String,
        actual: String,
        expected: String,
    },

    #[error("Shard index {index} is out of range ({shards} shards configured)")]
    ShardOutOfRange {
        index: usize,
        shards: usize,
    },

    #[error("Operation cancelled: {reason}")]
    Cancelled {
        reason: String,
    },

    /// DB, Kafka and other transport failures
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),

    /// Names the layer an error travelled through. Never changes its kind.
    #[error("{operation}: {source}")]
    Context {
        operation: &'static str,
        source: Box<DomainError>,
    },

    /// A multi-step operation failed and undoing its applied steps failed as well.
    /// `source` is the original failure and decides the kind.
    #[error("{source}; compensation failed: {compensation}; not released: [{}]", .unreleased.join(", "))]
    CompensationFailed {
        source: Box<DomainError>,
        compensation: Box<DomainError>,
        unreleased: Vec<String>,
    },

    /// A step-by-step operation stopped midway. `remaining` names the steps not applied.
    #[error("{source}; not processed: [{}]", .remaining.join(", "))]
    Incomplete {
        source: Box<DomainError>,
        remaining: Vec<String>,
    },
}

impl DomainError {
    /// Classification used for control decisions. Wrappers report the kind of what they wrap.
    pub fn kind(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::ValidationFailed,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::InsufficientStock { .. } | Self::InsufficientReserved { .. } => {
                ErrorCode::InsufficientStock
            }
            Self::InvalidState { .. } => ErrorCode::InvalidState,
            Self::Cancelled { .. } => ErrorCode::Cancelled,
            Self::ShardOutOfRange { .. } | Self::Infrastructure(_) => {
                ErrorCode::InfrastructureFailure
            }
            Self::Internal(_) => ErrorCode::InternalError,
            Self::Context { source, .. }
            | Self::CompensationFailed { source, .. }
            | Self::Incomplete { source, .. } => source.kind(),
        }
    }

    /// The innermost error, with every wrapper peeled off.
    pub fn root(&self) -> &DomainError {
        match self {
            Self::Context { source, .. }
            | Self::CompensationFailed { source, .. }
            | Self::Incomplete { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn with_operation(self, operation: &'static str) -> Self {
        Self::Context {
            operation,
            source: Box::new(self),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorCode::NotFound
    }

    pub fn is_insufficient_stock(&self) -> bool {
        self.kind() == ErrorCode::InsufficientStock
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => DomainError::Validation {
                field: "request",
                reason: err.message,
            },
            ErrorCode::Cancelled => DomainError::Cancelled { reason: err.message },
            ErrorCode::InfrastructureFailure => {
                DomainError::Infrastructure(err.message)
            }
            _ => DomainError::Internal(err.message),
        }
    }
}

/// Adds the operation name to an error while keeping its kind.
pub trait ResultExt<T> {
    fn with_operation(self, operation: &'static str) -> Result<T, DomainError>;
}

impl<T> ResultExt<T> for Result<T, DomainError> {
    fn with_operation(self, operation: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| e.with_operation(operation))
    }
}
