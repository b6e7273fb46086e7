// crates/shared-kernel/src/domain/transaction/mod.rs

mod transaction;

pub use transaction::Transaction;

#[cfg(any(test, feature = "test-utils"))]
mod transaction_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use transaction_stub::{as_fake, FakeTransaction};
