// crates/shared-kernel/src/infrastructure/kafka/kafka_message_consumer.rs

use std::sync::Arc;
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::{BorrowedMessage, Headers, Message};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use crate::application::ports::{InboundMessage, MessageConsumer, MessageHandler};
use crate::errors::{AppError, AppResult};

/// Consumer-group reader. At most `max_concurrency` handlers run at once.
pub struct KafkaMessageConsumer {
    client_config: ClientConfig,
    shutdown_token: CancellationToken,
    concurrency_limit: Arc<Semaphore>,
}

impl KafkaMessageConsumer {
    pub fn new(brokers: &str, group_id: &str, max_concurrency: usize) -> Self {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.auto.commit", "true")
            .set("auto.commit.interval.ms", "5000")
            .set("auto.offset.reset", "earliest")
            .set("session.timeout.ms", "45000")
            .set("max.poll.interval.ms", "300000");

        Self {
            client_config: config,
            shutdown_token: CancellationToken::new(),
            concurrency_limit: Arc::new(Semaphore::new(max_concurrency.max(1))),
        }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    pub fn stop(&self) {
        tracing::info!("Signaling Kafka consumer to stop...");
        self.shutdown_token.cancel();
    }
}

fn to_inbound(message: &BorrowedMessage<'_>) -> InboundMessage {
    let headers = message
        .headers()
        .map(|hs| {
            hs.iter()
                .map(|h| {
                    let value = h.value.map(|v| String::from_utf8_lossy(v).into_owned()).unwrap_or_default();
                    (h.key.to_string(), value)
                })
                .collect()
        })
        .unwrap_or_default();

    InboundMessage {
        topic: message.topic().to_string(),
        key: message.key().map(|k| String::from_utf8_lossy(k).into_owned()),
        payload: message.payload().map(<[u8]>::to_vec).unwrap_or_default(),
        headers,
        partition: message.partition(),
        offset: message.offset(),
    }
}

#[async_trait]
impl MessageConsumer for KafkaMessageConsumer {
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()> {
        let consumer: StreamConsumer = self.client_config.create()?;
        consumer.subscribe(&[topic])?;

        let handler = Arc::new(handler);
        tracing::info!(topic, "Kafka consumer started");

        while !self.shutdown_token.is_cancelled() {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => break,
                result = consumer.recv() => {
                    match result {
                        Ok(message) => {
                            let inbound = to_inbound(&message);
                            let h = Arc::clone(&handler);
                            let permit = self.concurrency_limit.clone().acquire_owned().await
                                .map_err(|e| AppError::internal(e.to_string()))?;

                            tokio::spawn(async move {
                                if let Err(e) = (h)(inbound).await {
                                    tracing::error!(error = %e, "Handler failed for message");
                                }
                                drop(permit);
                            });
                        }
                        Err(e) => tracing::error!(error = %e, "Kafka receive error"),
                    }
                }
            }
        }
        tracing::info!("Kafka consumer loop stopped");
        Ok(())
    }
}
