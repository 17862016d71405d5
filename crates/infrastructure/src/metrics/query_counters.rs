use prometheus::{opts, Encoder, IntCounter, Registry, TextEncoder};
use resolvr_application::ports::QueryMetricsPort;

/// Query counters backed by a private Prometheus registry.
pub struct PrometheusQueryMetrics {
    registry: Registry,
    requests_total: IntCounter,
    synthesized_a: IntCounter,
    unhandled: IntCounter,
}

impl PrometheusQueryMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounter::with_opts(opts!(
            "dns_requests_total",
            "Total number of DNS requests received"
        ))?;
        let synthesized_a = IntCounter::with_opts(opts!(
            "dns_requests_type_a",
            "A queries answered from the query name"
        ))?;
        let unhandled = IntCounter::with_opts(opts!(
            "dns_requests_unhandled",
            "Queries for record types the zone does not serve"
        ))?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(synthesized_a.clone()))?;
        registry.register(Box::new(unhandled.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            synthesized_a,
            unhandled,
        })
    }

    /// Renders all counters in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

impl QueryMetricsPort for PrometheusQueryMetrics {
    fn record_request(&self) {
        self.requests_total.inc();
    }

    fn record_synthesized_a(&self) {
        self.synthesized_a.inc();
    }

    fn record_unhandled_type(&self) {
        self.unhandled.inc();
    }
}
