use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use resolvr_infrastructure::metrics::PrometheusQueryMetrics;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

pub async fn start_metrics_server(
    bind_addr: SocketAddr,
    metrics: Arc<PrometheusQueryMetrics>,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        metrics_url = format!("http://{}/metrics", bind_addr),
        "Starting metrics server"
    );

    let app = create_app(metrics);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(metrics: Arc<PrometheusQueryMetrics>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(metrics)
}

async fn metrics_handler(
    State(metrics): State<Arc<PrometheusQueryMetrics>>,
) -> Result<String, StatusCode> {
    metrics.export().map_err(|e| {
        error!(error = %e, "Failed to encode metrics");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

async fn health_handler() -> &'static str {
    "OK"
}
