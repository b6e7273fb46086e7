// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// Domain result: aggregates, use cases, repositories (ports).
pub type Result<T> = std::result::Result<T, DomainError>;

/// Executable result: workers, handlers, binaries.
pub type AppResult<T> = std::result::Result<T, AppError>;

pub fn internal_err(msg: impl Into<String>) -> DomainError {
    DomainError::Internal(msg.into())
}
