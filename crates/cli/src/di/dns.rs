use resolvr_application::services::StaticZone;
use resolvr_application::use_cases::ResolveQueryUseCase;
use resolvr_domain::Config;
use resolvr_infrastructure::dns::HickoryUpstreamResolver;
use resolvr_infrastructure::metrics::PrometheusQueryMetrics;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub use_case: Arc<ResolveQueryUseCase>,
    pub metrics: Arc<PrometheusQueryMetrics>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let zone = StaticZone::from_config(&config.zone)?;
        let stats = zone.stats();
        info!(
            zone = %zone.origin(),
            a_records = stats.a_records,
            aaaa_records = stats.aaaa_records,
            cname_records = stats.cname_records,
            ns_records = stats.ns_records,
            "Static zone built"
        );

        let upstream_addr = config.upstream.socket_addr().map_err(anyhow::Error::msg)?;
        let upstream = Arc::new(HickoryUpstreamResolver::new(
            upstream_addr,
            config.upstream.timeout(),
        ));
        info!(
            upstream = %upstream_addr,
            timeout_ms = config.upstream.timeout_ms,
            "Upstream resolver configured"
        );

        let metrics = Arc::new(PrometheusQueryMetrics::new()?);

        let use_case = ResolveQueryUseCase::new(Arc::new(zone), upstream, metrics.clone())
            .with_chase_timeout(config.upstream.timeout())
            .with_empty_question_policy(config.compat.empty_question);

        Ok(Self {
            use_case: Arc::new(use_case),
            metrics,
        })
    }
}
