// crates/loms/src/infrastructure/bootstrap/notifier.rs

use std::sync::Arc;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::kafka::KafkaMessageConsumer;

use crate::application::workers::OrderEventsNotifier;
use crate::infrastructure::bootstrap::outbox::cancel_on_ctrl_c;
use crate::infrastructure::bootstrap::{init_tracing, NotifierConfig};

/// Logs every order event until Ctrl+C.
pub async fn run_notifier() -> AppResult<()> {
    init_tracing();
    let config = NotifierConfig::from_env();
    tracing::info!(
        topic = %config.kafka.order_events_topic,
        group = %config.group_id,
        "starting notifier"
    );

    let consumer = KafkaMessageConsumer::new(&config.kafka.brokers, &config.group_id, config.max_concurrency);
    tokio::spawn(cancel_on_ctrl_c(consumer.shutdown_token()));

    OrderEventsNotifier::new(Arc::new(consumer))
        .start(&config.kafka.order_events_topic)
        .await?;

    tracing::info!("notifier stopped");
    Ok(())
}
