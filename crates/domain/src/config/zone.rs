use serde::{Deserialize, Serialize};

/// A `(name, value)` pair for a static A, AAAA or CNAME record.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StaticRecordConfig {
    pub name: String,

    pub value: String,
}

impl StaticRecordConfig {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A nameserver for the zone. Yields an NS record under the zone hostname
/// and an A record under `hostname`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NameserverConfig {
    pub hostname: String,

    pub address: String,
}

impl NameserverConfig {
    pub fn new(hostname: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Base hostname of the zone, with a trailing dot.
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Address for the A record of the base hostname itself.
    #[serde(default = "default_address")]
    pub address: Option<String>,

    #[serde(default)]
    pub a_records: Vec<StaticRecordConfig>,

    #[serde(default)]
    pub aaaa_records: Vec<StaticRecordConfig>,

    #[serde(default)]
    pub cname_records: Vec<StaticRecordConfig>,

    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<NameserverConfig>,
}

impl ZoneConfig {
    /// An empty zone rooted at `hostname`, without a base address or nameservers.
    pub fn empty(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            address: None,
            a_records: vec![],
            aaaa_records: vec![],
            cname_records: vec![],
            nameservers: vec![],
        }
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            address: default_address(),
            a_records: vec![],
            aaaa_records: vec![],
            cname_records: vec![],
            nameservers: default_nameservers(),
        }
    }
}

fn default_hostname() -> String {
    "resolvr.io.".to_string()
}

fn default_address() -> Option<String> {
    Some("127.0.0.1".to_string())
}

fn default_nameservers() -> Vec<NameserverConfig> {
    vec![
        NameserverConfig::new("ns1.resolvr.io.", "127.0.0.1"),
        NameserverConfig::new("ns2.resolvr.io.", "127.0.0.1"),
    ]
}
