// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_config.rs

use std::time::Duration;

/// Pool sizing shared by every pool of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostgresConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            connect_timeout: Duration::from_secs(3),
        }
    }
}

impl PostgresConfig {
    pub fn new(max_connections: u32, min_connections: u32, connect_timeout: Duration) -> Self {
        Self {
            max_connections,
            min_connections,
            connect_timeout,
        }
    }

    /// `DATABASE_MAX_CONNECTIONS`, `DATABASE_MIN_CONNECTIONS`, `DATABASE_CONNECT_TIMEOUT` (seconds).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let read = |name: &str| std::env::var(name).ok().and_then(|v| v.parse::<u64>().ok());

        Self {
            max_connections: read("DATABASE_MAX_CONNECTIONS").map(|v| v as u32).unwrap_or(defaults.max_connections),
            min_connections: read("DATABASE_MIN_CONNECTIONS").map(|v| v as u32).unwrap_or(defaults.min_connections),
            connect_timeout: read("DATABASE_CONNECT_TIMEOUT").map(Duration::from_secs).unwrap_or(defaults.connect_timeout),
        }
    }
}
