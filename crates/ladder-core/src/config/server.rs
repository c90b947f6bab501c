//! HTTP server configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the HTTP front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address, e.g. "0.0.0.0:50000".
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Seconds to wait for pooled connections to be returned on shutdown.
    #[serde(default = "default_shutdown_grace")]
    pub shutdown_grace_seconds: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            shutdown_grace_seconds: default_shutdown_grace(),
        }
    }
}

impl ServerConfig {
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(u64::from(self.shutdown_grace_seconds))
    }
}

fn default_bind() -> String {
    "0.0.0.0:50000".to_string()
}

fn default_shutdown_grace() -> u32 {
    10
}
