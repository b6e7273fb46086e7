// crates/loms/src/infrastructure/bootstrap/mod.rs

mod config;
mod context;
mod notifier;
mod outbox;
mod telemetry;

pub use config::{LomsConfig, NotifierConfig};
pub use context::LomsContext;
pub use notifier::run_notifier;
pub use outbox::run_outbox_publisher;
pub use telemetry::init_tracing;
