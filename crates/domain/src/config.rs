pub mod compat;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod root;
pub mod server;
pub mod upstream;
pub mod zone;

pub use compat::{CompatConfig, EmptyQuestionPolicy};
pub use errors::ConfigError;
pub use logging::{Environment, LogFormat, LoggingConfig};
pub use metrics::MetricsConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
pub use zone::{NameserverConfig, StaticRecordConfig, ZoneConfig};
