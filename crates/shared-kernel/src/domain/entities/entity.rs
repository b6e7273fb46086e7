// crates/shared-kernel/src/domain/entities/entity.rs

use crate::errors::DomainError;

pub trait EntityMetadata {
    fn entity_name() -> &'static str;

    fn not_found<I: ToString>(id: I) -> DomainError {
        DomainError::NotFound {
            entity: Self::entity_name(),
            id: id.to_string(),
        }
    }
}
