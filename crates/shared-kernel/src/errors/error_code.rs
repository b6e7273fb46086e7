// crates/shared-kernel/src/errors/error_code.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    NotFound,
    /// Precondition failed: not enough stock (or reserve) for the request
    InsufficientStock,
    InvalidState,
    Cancelled,
    InternalError,
    InfrastructureFailure,
}
