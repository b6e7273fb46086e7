// crates/shared-kernel/src/infrastructure/kafka/kafka_config.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaConfig {
    /// Comma-separated `host:port` list
    pub brokers: String,
    pub order_events_topic: String,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            order_events_topic: "loms.order-events".to_string(),
        }
    }
}

impl KafkaConfig {
    /// `KAFKA_BROKERS`, `ORDER_EVENTS_TOPIC`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            brokers: std::env::var("KAFKA_BROKERS").unwrap_or(defaults.brokers),
            order_events_topic: std::env::var("ORDER_EVENTS_TOPIC").unwrap_or(defaults.order_events_topic),
        }
    }
}
