use clap::Parser;
use resolvr_domain::config::{Environment, LogFormat};
use resolvr_domain::CliOverrides;
use resolvr_infrastructure::dns::ZoneRequestHandler;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "resolvr")]
#[command(version)]
#[command(about = "resolvr - authoritative DNS for a single zone with hostname-encoded addresses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", env = "RESOLVR_CONFIG")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long, env = "RESOLVR_DNS_PORT")]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, env = "RESOLVR_BIND")]
    bind: Option<String>,

    /// Zone hostname, e.g. "resolvr.io."
    #[arg(long, env = "RESOLVR_HOSTNAME")]
    hostname: Option<String>,

    /// Upstream resolver for CNAME chasing (ip:port)
    #[arg(long, env = "RESOLVR_UPSTREAM")]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RESOLVR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long, env = "RESOLVR_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Deployment environment (dev, prod)
    #[arg(long = "env", env = "RESOLVR_ENV")]
    environment: Option<Environment>,

    /// Metrics HTTP port
    #[arg(short = 'm', long, env = "RESOLVR_METRICS_PORT")]
    metrics_port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        hostname: cli.hostname.clone(),
        upstream: cli.upstream.clone(),
        log_level: cli.log_level.clone(),
        log_format: cli.log_format,
        environment: cli.environment,
        metrics_port: cli.metrics_port,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("Starting resolvr v{}", env!("CARGO_PKG_VERSION"));
    match cli.config.clone().or_else(resolvr_domain::Config::get_config_path) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    let services = di::DnsServices::new(&config)?;

    if config.metrics.enabled {
        let metrics_addr = config.metrics.socket_addr()?;
        let metrics = services.metrics.clone();
        tokio::spawn(async move {
            if let Err(e) = server::start_metrics_server(metrics_addr, metrics).await {
                error!(error = %e, "Metrics server error");
            }
        });
    }

    let handler = ZoneRequestHandler::new(services.use_case);
    if let Err(e) = server::start_dns_server(config.server.dns_addr(), handler).await {
        error!(error = %e, "DNS server error");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
