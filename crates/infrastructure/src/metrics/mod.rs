pub mod query_counters;

pub use query_counters::PrometheusQueryMetrics;
