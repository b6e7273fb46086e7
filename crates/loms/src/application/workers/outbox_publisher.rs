// crates/loms/src/application/workers/outbox_publisher.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;
use futures::future::join_all;
use shared_kernel::application::ports::{DeliveryReport, DeliveryReports, MessageProducer, OutboundMessage};
use shared_kernel::domain::events::OutboxMessage;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::errors::{AppResult, Result};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::domain::events::{EventHeaders, OrderEvent, TRACE_ID_HEADER};

const CLOSE_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// Drains outbox tables onto the message bus.
///
/// One poll loop runs per outbox (one per shard) and a single drain loop reads the
/// producer's delivery reports. A row is marked complete as soon as the producer accepts
/// it; delivery failures are only logged.
pub struct OutboxPublisher {
    outboxes: Vec<Arc<dyn OutboxRepository>>,
    producer: Arc<dyn MessageProducer>,
    reports: Mutex<Option<DeliveryReports>>,
    interval: Duration,
}

impl OutboxPublisher {
    pub fn new(
        outboxes: Vec<Arc<dyn OutboxRepository>>,
        producer: Arc<dyn MessageProducer>,
        reports: DeliveryReports,
        interval: Duration,
    ) -> Self {
        Self {
            outboxes,
            producer,
            reports: Mutex::new(Some(reports)),
            interval,
        }
    }

    /// Runs until `shutdown` is cancelled.
    pub async fn run(&self, shutdown: CancellationToken) {
        let reports = self.reports.lock().ok().and_then(|mut r| r.take());

        let poll_loops = join_all(
            self.outboxes
                .iter()
                .enumerate()
                .map(|(shard, outbox)| self.poll_loop(shard, outbox.as_ref(), shutdown.clone())),
        );

        match reports {
            Some(reports) => {
                tokio::join!(poll_loops, drain_reports(reports, shutdown.clone()));
            }
            None => {
                tracing::warn!("[handle events result] reports already taken, not draining");
                poll_loops.await;
            }
        }
    }

    async fn poll_loop(&self, shard: usize, outbox: &dyn OutboxRepository, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!(shard, "[handle events] terminate");
                    return;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.handle_events(outbox).await {
                        tracing::error!(shard, error = %e, "[handle events] get wait list failed");
                    }
                }
            }
        }
    }

    /// One pass over the pending rows of `outbox`. Returns how many rows were handed to the producer.
    pub async fn handle_events(&self, outbox: &dyn OutboxRepository) -> Result<usize> {
        let pending = outbox.get_wait_list().await?;
        if !pending.is_empty() {
            tracing::debug!(pending = pending.len(), "[handle events] start");
        }

        let mut submitted = 0;
        for row in pending {
            let message = match to_outbound(&row) {
                Ok(message) => message,
                Err(e) => {
                    tracing::error!(id = row.id, error = %e, "[handle events] undecodable outbox row");
                    continue;
                }
            };
            let (key, topic) = (message.key.clone(), message.topic.clone());

            if let Err(e) = self.producer.submit(message) {
                tracing::error!(id = row.id, error = %e, "[handle events] submit failed");
                continue;
            }
            submitted += 1;

            if let Err(e) = outbox.set_complete(row.id).await {
                tracing::error!(id = row.id, error = %e, "[handle events] set complete failed");
            }
            tracing::info!(id = row.id, %key, %topic, "[handle events] sent");
        }
        Ok(submitted)
    }

    /// Flushes whatever the producer still holds.
    pub async fn close(&self) -> AppResult<()> {
        self.producer.flush(CLOSE_FLUSH_TIMEOUT).await
    }
}

fn to_outbound(row: &OutboxMessage) -> Result<OutboundMessage> {
    let event = OrderEvent::from_bytes(&row.event)?;
    let headers = EventHeaders::from_bytes(&row.headers)?;

    Ok(OutboundMessage {
        topic: row.topic.clone(),
        key: event.key(),
        payload: row.event.clone(),
        headers: vec![(TRACE_ID_HEADER.to_string(), headers.trace_id)],
    })
}

async fn drain_reports(mut reports: DeliveryReports, shutdown: CancellationToken) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::info!("[handle events result] terminate");
                return;
            }
            report = reports.recv() => match report {
                Some(DeliveryReport::Delivered { topic, key, partition, offset }) => {
                    tracing::info!(%key, %topic, partition, offset, "[handle events result] success");
                }
                Some(DeliveryReport::Failed { topic, key, reason }) => {
                    tracing::error!(%key, %topic, %reason, "[handle events result] error");
                }
                None => {
                    tracing::info!("[handle events result] report channel closed");
                    return;
                }
            },
        }
    }
}
