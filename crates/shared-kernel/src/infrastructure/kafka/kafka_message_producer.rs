// crates/shared-kernel/src/infrastructure/kafka/kafka_message_producer.rs

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::message::{Header, Message, OwnedHeaders};
use rdkafka::producer::{BaseRecord, DeliveryResult, Producer, ProducerContext, ThreadedProducer};
use rdkafka::ClientContext;
use tokio::sync::mpsc::{self, UnboundedSender};
use crate::application::ports::{DeliveryReport, DeliveryReports, MessageProducer, OutboundMessage};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Forwards librdkafka delivery callbacks into the report channel.
pub struct ReportingContext {
    reports: UnboundedSender<DeliveryReport>,
}

impl ClientContext for ReportingContext {}

impl ProducerContext for ReportingContext {
    type DeliveryOpaque = ();

    fn delivery(&self, result: &DeliveryResult<'_>, _opaque: Self::DeliveryOpaque) {
        let report = match result {
            Ok(msg) => DeliveryReport::Delivered {
                topic: msg.topic().to_string(),
                key: key_of(msg),
                partition: msg.partition(),
                offset: msg.offset(),
            },
            Err((err, msg)) => DeliveryReport::Failed {
                topic: msg.topic().to_string(),
                key: key_of(msg),
                reason: err.to_string(),
            },
        };
        // Receiver gone means the publisher is shutting down
        let _ = self.reports.send(report);
    }
}

fn key_of<M: Message>(msg: &M) -> String {
    msg.key()
        .map(|k| String::from_utf8_lossy(k).into_owned())
        .unwrap_or_default()
}

/// Asynchronous producer: `submit` enqueues into librdkafka and returns at once.
pub struct KafkaMessageProducer {
    producer: Arc<ThreadedProducer<ReportingContext>>,
}

impl KafkaMessageProducer {
    pub fn new(brokers: &str) -> AppResult<(Self, DeliveryReports)> {
        let (tx, rx) = mpsc::unbounded_channel();

        let producer: ThreadedProducer<ReportingContext> = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("acks", "all")
            .set("enable.idempotence", "true")
            .set("max.in.flight.requests.per.connection", "1")
            .set("retries", "5")
            .set("retry.backoff.ms", "10")
            .set("compression.type", "gzip")
            .set("linger.ms", "100")
            .set("batch.num.messages", "10")
            .set("message.timeout.ms", "5000")
            .create_with_context(ReportingContext { reports: tx })
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, format!("Kafka config error: {e}")))?;

        Ok((Self { producer: Arc::new(producer) }, rx))
    }
}

#[async_trait]
impl MessageProducer for KafkaMessageProducer {
    fn submit(&self, message: OutboundMessage) -> AppResult<()> {
        let headers = message.headers.iter().fold(OwnedHeaders::new(), |acc, (key, value)| {
            acc.insert(Header { key: key.as_str(), value: Some(value.as_str()) })
        });

        let record = BaseRecord::to(&message.topic)
            .key(&message.key)
            .payload(&message.payload)
            .headers(headers);

        self.producer
            .send(record)
            .map_err(|(e, _)| AppError::from(e))
    }

    async fn flush(&self, timeout: Duration) -> AppResult<()> {
        let producer = Arc::clone(&self.producer);
        tokio::task::spawn_blocking(move || producer.flush(timeout))
            .await
            .map_err(|e| AppError::internal(format!("flush task failed: {e}")))?
            .map_err(AppError::from)
    }
}
