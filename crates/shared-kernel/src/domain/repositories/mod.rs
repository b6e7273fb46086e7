// crates/shared-kernel/src/domain/repositories/mod.rs

mod outbox_repository;

pub use outbox_repository::OutboxRepository;

#[cfg(any(test, feature = "test-utils"))]
mod outbox_repository_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use outbox_repository_stub::OutboxRepositoryStub;
