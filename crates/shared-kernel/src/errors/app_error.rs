// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        let code = error.kind();
        match code {
            // Rejections carry the full message: the caller needs it to fix the request
            ErrorCode::ValidationFailed
            | ErrorCode::NotFound
            | ErrorCode::InsufficientStock
            | ErrorCode::InvalidState => {
                let details = match error.root() {
                    DomainError::Validation { field, reason } => {
                        Some(serde_json::json!({ "field": field, "reason": reason }))
                    }
                    DomainError::InsufficientStock { item, requested, available } => Some(
                        serde_json::json!({ "item": item, "requested": requested, "available": available }),
                    ),
                    _ => None,
                };
                Self {
                    code,
                    message: error.to_string(),
                    details,
                }
            }

            ErrorCode::Cancelled => Self::new(code, error.to_string()),

            // Technical failures are logged here and masked for the client
            _ => {
                tracing::error!(error = %error, "unexpected failure");
                Self::new(
                    ErrorCode::InternalError,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database infrastructure error: {:?}", err);

        Self::new(ErrorCode::InfrastructureFailure, "A database error occurred")
    }
}

#[cfg(feature = "kafka")]
impl From<rdkafka::error::KafkaError> for AppError {
    fn from(err: rdkafka::error::KafkaError) -> Self {
        tracing::error!("Kafka infrastructure error: {:?}", err);

        Self::new(
            ErrorCode::InfrastructureFailure,
            format!("Messaging system error: {}", err),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
