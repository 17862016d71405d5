use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Query timeout")]
    QueryTimeout,
}

/// Raised while turning zone configuration into static tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("Invalid {record_type} address '{value}' for {name}")]
    InvalidAddress {
        name: String,
        record_type: &'static str,
        value: String,
    },

    #[error("Invalid record name: '{0}'")]
    InvalidName(String),

    #[error("Zone hostname must not be empty")]
    MissingHostname,
}
