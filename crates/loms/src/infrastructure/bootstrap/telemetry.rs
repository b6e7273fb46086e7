// crates/loms/src/infrastructure/bootstrap/telemetry.rs

use tracing_subscriber::EnvFilter;

/// `fmt` subscriber filtered by `RUST_LOG`, `info` when unset. A second call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
