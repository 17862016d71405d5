/// Counter sink the resolver reports to. Reporting never affects answers.
pub trait QueryMetricsPort: Send + Sync {
    fn record_request(&self);

    /// An A query answered from the hostname pattern or the loopback fallback.
    fn record_synthesized_a(&self);

    fn record_unhandled_type(&self);
}

pub struct NoopQueryMetrics;

impl QueryMetricsPort for NoopQueryMetrics {
    fn record_request(&self) {}

    fn record_synthesized_a(&self) {}

    fn record_unhandled_type(&self) {}
}
