// crates/loms/src/infrastructure/bootstrap/outbox.rs

use std::sync::Arc;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::kafka::KafkaMessageProducer;
use tokio_util::sync::CancellationToken;

use crate::application::workers::OutboxPublisher;
use crate::infrastructure::bootstrap::{init_tracing, LomsConfig, LomsContext};

/// Publishes the outbox of every shard until Ctrl+C, then flushes the producer.
pub async fn run_outbox_publisher() -> AppResult<()> {
    init_tracing();
    let config = LomsConfig::from_env();
    tracing::info!(
        shards = config.shard_urls.len(),
        topic = %config.kafka.order_events_topic,
        interval_ms = config.outbox_interval.as_millis() as u64,
        "starting outbox publisher"
    );

    let ctx = LomsContext::connect(&config).await?;
    let (producer, reports) = KafkaMessageProducer::new(&config.kafka.brokers)?;
    let publisher = OutboxPublisher::new(ctx.outboxes(), Arc::new(producer), reports, config.outbox_interval);

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    publisher.run(shutdown).await;
    publisher.close().await?;

    tracing::info!("outbox publisher stopped");
    Ok(())
}

pub(crate) async fn cancel_on_ctrl_c(token: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "unable to listen for shutdown signal"),
    }
    token.cancel();
}
