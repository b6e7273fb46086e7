// crates/shared-kernel/src/application/ports/message_consumer.rs

use async_trait::async_trait;
use futures::future::BoxFuture;
use crate::errors::AppResult;

/// A message as read from the bus, before any domain decoding.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub topic: String,
    pub key: Option<String>,
    pub payload: Vec<u8>,
    pub headers: Vec<(String, String)>,
    pub partition: i32,
    pub offset: i64,
}

impl InboundMessage {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

pub type MessageHandler = Box<dyn Fn(InboundMessage) -> BoxFuture<'static, AppResult<()>> + Send + Sync>;

#[async_trait]
pub trait MessageConsumer: Send + Sync {
    /// Reads `topic` until stopped, handing each message to `handler`.
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()>;
}
