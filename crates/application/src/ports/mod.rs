mod query_metrics;
mod upstream_resolver;

pub use query_metrics::{NoopQueryMetrics, QueryMetricsPort};
pub use upstream_resolver::UpstreamResolver;
