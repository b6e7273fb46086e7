// crates/loms/src/application/workers/order_events_notifier.rs

use std::sync::Arc;
use futures::FutureExt;
use shared_kernel::application::ports::{InboundMessage, MessageConsumer, MessageHandler};
use shared_kernel::errors::AppResult;

use crate::domain::events::{OrderEvent, TRACE_ID_HEADER};

/// Reads order events and logs each one. Undecodable messages are logged and skipped.
pub struct OrderEventsNotifier {
    consumer: Arc<dyn MessageConsumer>,
}

impl OrderEventsNotifier {
    pub fn new(consumer: Arc<dyn MessageConsumer>) -> Self {
        Self { consumer }
    }

    pub async fn start(&self, topic: &str) -> AppResult<()> {
        let handler: MessageHandler = Box::new(|message: InboundMessage| async move { Self::handle(message) }.boxed());
        self.consumer.consume(topic, handler).await
    }

    pub fn handle(message: InboundMessage) -> AppResult<()> {
        match OrderEvent::from_bytes(&message.payload) {
            Ok(event) => {
                tracing::info!(
                    order_id = %event.order_id,
                    status = %event.status,
                    time = %event.time,
                    trace_id = message.header(TRACE_ID_HEADER).unwrap_or_default(),
                    partition = message.partition,
                    offset = message.offset,
                    "[kafka-consumer] consume event"
                );
            }
            Err(e) => {
                tracing::warn!(
                    partition = message.partition,
                    offset = message.offset,
                    error = %e,
                    "[kafka-consumer] skipping undecodable message"
                );
            }
        }
        Ok(())
    }
}
