use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Resolver used to chase CNAME targets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.server
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid upstream server '{}': {}", self.server, e))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_ms() -> u64 {
    300
}
