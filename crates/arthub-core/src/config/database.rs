//! Database pool configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, including credentials.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_pool_max")]
    pub max_connections: u32,
    /// Connections kept open while idle.
    #[serde(default = "default_pool_min")]
    pub min_connections: u32,
    /// How long to wait for a connection before giving up, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// How long an idle connection may live, in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

fn default_pool_max() -> u32 {
    20
}

fn default_pool_min() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
