use serde::{Deserialize, Serialize};

use super::compat::CompatConfig;
use super::errors::ConfigError;
use super::logging::{Environment, LogFormat, LoggingConfig};
use super::metrics::MetricsConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use super::zone::ZoneConfig;

/// Main configuration structure for resolvr
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// The zone this server is authoritative for
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Resolver used for CNAME chasing
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub compat: CompatConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. resolvr.toml in current directory
    /// 3. /etc/resolvr/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(hostname) = overrides.hostname {
            self.zone.hostname = hostname;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.server = upstream;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        // An explicit format wins over the environment preset.
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        } else if let Some(env) = overrides.environment {
            self.logging.format = env.log_format();
        }
        if let Some(port) = overrides.metrics_port {
            self.metrics.port = port;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.zone.hostname.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Zone hostname cannot be empty".to_string(),
            ));
        }

        if self.zone.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "No nameservers configured".to_string(),
            ));
        }

        self.upstream.socket_addr().map_err(ConfigError::Validation)?;

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        if self.metrics.enabled {
            if self.metrics.port == 0 {
                return Err(ConfigError::Validation(
                    "Metrics port cannot be 0".to_string(),
                ));
            }
            self.metrics.socket_addr()?;
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("resolvr.toml").exists() {
            Some("resolvr.toml".to_string())
        } else if std::path::Path::new("/etc/resolvr/config.toml").exists() {
            Some("/etc/resolvr/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub hostname: Option<String>,
    pub upstream: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub environment: Option<Environment>,
    pub metrics_port: Option<u16>,
}
