// crates/shared-kernel/src/domain/repositories/outbox_repository_stub.rs

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use chrono::Utc;
use crate::domain::events::{NewOutboxMessage, OutboxMessage};
use crate::domain::repositories::OutboxRepository;
use crate::domain::transaction::{as_fake, Transaction};
use crate::errors::{DomainError, Result};

#[derive(Default)]
pub struct OutboxRepositoryStub {
    pub messages: Arc<Mutex<Vec<OutboxMessage>>>,
    next_id: Arc<Mutex<i64>>,
    /// Returned by `create` when set
    pub create_error: Mutex<Option<DomainError>>,
    /// Returned by `set_complete` when set
    pub complete_error: Mutex<Option<DomainError>>,
}

impl OutboxRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_create_with(&self, error: DomainError) {
        *self.create_error.lock().unwrap() = Some(error);
    }

    pub fn fail_complete_with(&self, error: DomainError) {
        *self.complete_error.lock().unwrap() = Some(error);
    }

    pub fn all(&self) -> Vec<OutboxMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn pending(&self) -> Vec<OutboxMessage> {
        self.all().into_iter().filter(OutboxMessage::is_pending).collect()
    }
}

#[async_trait]
impl OutboxRepository for OutboxRepositoryStub {
    async fn create(&self, tx: Option<&mut dyn Transaction>, message: NewOutboxMessage) -> Result<i64> {
        if let Some(err) = self.create_error.lock().unwrap().clone() {
            return Err(err);
        }

        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let row = OutboxMessage {
            id,
            topic: message.topic,
            event: message.event,
            headers: message.headers,
            created_at: Utc::now(),
            completed_at: None,
        };

        match tx {
            Some(tx) => {
                let messages = self.messages.clone();
                as_fake(tx)?.defer(move || messages.lock().unwrap().push(row));
            }
            None => self.messages.lock().unwrap().push(row),
        }
        Ok(id)
    }

    async fn get_wait_list(&self) -> Result<Vec<OutboxMessage>> {
        Ok(self.pending())
    }

    async fn set_complete(&self, id: i64) -> Result<()> {
        if let Some(err) = self.complete_error.lock().unwrap().clone() {
            return Err(err);
        }
        let mut messages = self.messages.lock().unwrap();
        let row = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::NotFound { entity: "OutboxMessage", id: id.to_string() })?;
        row.completed_at = Some(Utc::now());
        Ok(())
    }
}
