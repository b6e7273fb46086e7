// crates/shared-kernel/src/application/ports/message_producer_stub.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedSender};
use crate::application::ports::{DeliveryReport, DeliveryReports, MessageProducer, OutboundMessage};
use crate::errors::{AppError, AppResult};

/// Records submitted messages and answers each one on the report channel.
pub struct MessageProducerStub {
    pub sent: Arc<Mutex<Vec<OutboundMessage>>>,
    pub flushed: Arc<Mutex<usize>>,
    /// Returned by `submit` when set
    pub submit_error: Mutex<Option<AppError>>,
    /// When set, every accepted message is reported as `Failed` with this reason
    pub delivery_failure: Mutex<Option<String>>,
    reports: UnboundedSender<DeliveryReport>,
}

impl MessageProducerStub {
    pub fn new() -> (Self, DeliveryReports) {
        let (tx, rx) = mpsc::unbounded_channel();
        let stub = Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            flushed: Arc::new(Mutex::new(0)),
            submit_error: Mutex::new(None),
            delivery_failure: Mutex::new(None),
            reports: tx,
        };
        (stub, rx)
    }

    pub fn fail_submit_with(&self, error: AppError) {
        *self.submit_error.lock().unwrap() = Some(error);
    }

    pub fn fail_delivery_with(&self, reason: impl Into<String>) {
        *self.delivery_failure.lock().unwrap() = Some(reason.into());
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageProducer for MessageProducerStub {
    fn submit(&self, message: OutboundMessage) -> AppResult<()> {
        if let Some(err) = self.submit_error.lock().unwrap().clone() {
            return Err(err);
        }

        let mut sent = self.sent.lock().unwrap();
        let report = match self.delivery_failure.lock().unwrap().clone() {
            Some(reason) => DeliveryReport::Failed {
                topic: message.topic.clone(),
                key: message.key.clone(),
                reason,
            },
            None => DeliveryReport::Delivered {
                topic: message.topic.clone(),
                key: message.key.clone(),
                partition: 0,
                offset: sent.len() as i64,
            },
        };
        sent.push(message);
        let _ = self.reports.send(report);
        Ok(())
    }

    async fn flush(&self, _timeout: Duration) -> AppResult<()> {
        *self.flushed.lock().unwrap() += 1;
        Ok(())
    }
}
