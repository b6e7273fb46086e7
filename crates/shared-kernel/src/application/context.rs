// crates/shared-kernel/src/application/context.rs

use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use crate::errors::DomainError;

/// Per-call cancellation scope: an explicit token plus an optional deadline.
#[derive(Clone, Debug, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Resolves once the call is cancelled or its deadline passes.
    pub async fn done(&self) -> DomainError {
        match self.deadline {
            Some(deadline) => tokio::select! {
                _ = self.token.cancelled() => DomainError::Cancelled { reason: "call cancelled".into() },
                _ = tokio::time::sleep_until(deadline) => DomainError::Cancelled { reason: "deadline exceeded".into() },
            },
            None => {
                self.token.cancelled().await;
                DomainError::Cancelled { reason: "call cancelled".into() }
            }
        }
    }
}
