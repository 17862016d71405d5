#![allow(dead_code)]

use async_trait::async_trait;
use resolvr_application::ports::{QueryMetricsPort, UpstreamResolver};
use resolvr_application::services::StaticZone;
use resolvr_domain::{
    DomainError, NameserverConfig, ResourceRecord, StaticRecordConfig, ZoneConfig,
};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

pub const TEST_SERIAL: u32 = 2_024_061_500;

#[derive(Clone, Default)]
pub struct MockUpstreamResolver {
    responses: Arc<RwLock<HashMap<String, Result<Vec<ResourceRecord>, DomainError>>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_addresses(&self, name: &str, addresses: &[Ipv4Addr]) {
        let records = addresses
            .iter()
            .map(|addr| ResourceRecord::a(name, *addr, 60))
            .collect();
        self.set_response(name, Ok(records));
    }

    pub fn set_response(&self, name: &str, response: Result<Vec<ResourceRecord>, DomainError>) {
        self.responses
            .write()
            .unwrap()
            .insert(name.to_string(), response);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn resolve_a(&self, name: &str) -> Result<Vec<ResourceRecord>, DomainError> {
        self.calls.write().unwrap().push(name.to_string());

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::UpstreamUnavailable(format!(
                    "no answer for {name}"
                )))
            })
    }
}

#[derive(Default)]
pub struct RecordingMetrics {
    requests: AtomicU64,
    synthesized_a: AtomicU64,
    unhandled: AtomicU64,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn synthesized_a(&self) -> u64 {
        self.synthesized_a.load(Ordering::Relaxed)
    }

    pub fn unhandled(&self) -> u64 {
        self.unhandled.load(Ordering::Relaxed)
    }
}

impl QueryMetricsPort for RecordingMetrics {
    fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    fn record_synthesized_a(&self) {
        self.synthesized_a.fetch_add(1, Ordering::Relaxed);
    }

    fn record_unhandled_type(&self) {
        self.unhandled.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct ZoneConfigBuilder {
    config: ZoneConfig,
}

impl ZoneConfigBuilder {
    pub fn new(hostname: &str) -> Self {
        Self {
            config: ZoneConfig::empty(hostname),
        }
    }

    pub fn address(mut self, address: &str) -> Self {
        self.config.address = Some(address.to_string());
        self
    }

    pub fn a(mut self, name: &str, address: &str) -> Self {
        self.config
            .a_records
            .push(StaticRecordConfig::new(name, address));
        self
    }

    pub fn aaaa(mut self, name: &str, address: &str) -> Self {
        self.config
            .aaaa_records
            .push(StaticRecordConfig::new(name, address));
        self
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        self.config
            .cname_records
            .push(StaticRecordConfig::new(name, target));
        self
    }

    pub fn nameserver(mut self, hostname: &str, address: &str) -> Self {
        self.config
            .nameservers
            .push(NameserverConfig::new(hostname, address));
        self
    }

    pub fn build(self) -> ZoneConfig {
        self.config
    }

    pub fn build_zone(self) -> StaticZone {
        StaticZone::build(&self.config, TEST_SERIAL).unwrap()
    }
}

/// The zone used throughout the resolver tests.
pub fn example_zone() -> StaticZone {
    ZoneConfigBuilder::new("example.org.")
        .a("host.example.org.", "192.0.2.5")
        .aaaa("v6.example.org.", "2001:db8::5")
        .cname("www.example.org.", "origin.example.net.")
        .cname("alias.example.org.", "web.example.org.")
        .nameserver("ns1.example.org.", "192.0.2.1")
        .nameserver("ns2.example.org.", "192.0.2.2")
        .build_zone()
}
