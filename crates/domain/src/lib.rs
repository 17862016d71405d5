//! resolvr domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod hostname_address;

pub use config::{
    CliOverrides, Config, EmptyQuestionPolicy, NameserverConfig, StaticRecordConfig, ZoneConfig,
};
pub use dns_query::{normalize_name, DnsQuery, QueryType};
pub use dns_record::{
    RecordData, RecordType, ResourceRecord, SoaData, LONG_TTL, SHORT_TTL,
};
pub use errors::{DomainError, ZoneError};
