// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;

pub trait SqlxErrorExt<T> {
    /// `RowNotFound` becomes `NotFound` for entity `E`; anything else is infrastructure.
    fn map_domain<E: EntityMetadata>(self, id: impl ToString) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

/// 57014 is `query_canceled`: statement timeout or a server-side cancel.
fn cancellation(e: &sqlx::Error) -> Option<DomainError> {
    match e {
        sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "57014") => {
            Some(DomainError::Cancelled { reason: db_err.message().into() })
        }
        _ => None,
    }
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self, id: impl ToString) -> Result<T, DomainError> {
        self.map_err(|e| {
            if let Some(cancelled) = cancellation(&e) {
                return cancelled;
            }
            match e {
                sqlx::Error::RowNotFound => E::not_found(id),
                sqlx::Error::Database(db_err) => {
                    DomainError::Infrastructure(format!("{}: {}", E::entity_name(), db_err.message()))
                }
                other => DomainError::Infrastructure(format!("{}: {}", E::entity_name(), other)),
            }
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| {
            cancellation(&e).unwrap_or_else(|| DomainError::Infrastructure(format!("{}: {}", context, e)))
        })
    }
}
