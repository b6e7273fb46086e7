// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;

/// Explicit unit-of-work handle.
///
/// Repositories receive it as a parameter (`&mut dyn Transaction`) so that several writes
/// from different repositories land in one local database transaction. Adapters recover
/// their concrete type through `as_any_mut`.
pub trait Transaction: Send + Sync + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
