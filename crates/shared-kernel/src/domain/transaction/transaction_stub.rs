// crates/shared-kernel/src/domain/transaction/transaction_stub.rs

use std::any::Any;
use crate::domain::transaction::Transaction;

type Deferred = Box<dyn FnOnce() + Send + Sync>;

/// In-memory unit of work for stub repositories.
/// Writes are deferred until `commit`; dropping the transaction discards them.
#[derive(Default)]
pub struct FakeTransaction {
    deferred: Vec<Deferred>,
}

impl FakeTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, write: impl FnOnce() + Send + Sync + 'static) {
        self.deferred.push(Box::new(write));
    }

    pub fn commit(self) {
        for write in self.deferred {
            write();
        }
    }
}

impl Transaction for FakeTransaction {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Stubs call this with whatever handle they were given; any other type is a wiring bug.
pub fn as_fake(tx: &mut dyn Transaction) -> crate::errors::Result<&mut FakeTransaction> {
    tx.as_any_mut()
        .downcast_mut::<FakeTransaction>()
        .ok_or_else(|| crate::errors::DomainError::Internal("Type mismatch: Expected FakeTransaction".into()))
}
