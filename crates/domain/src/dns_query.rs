use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// Question type as it arrived on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    Known(RecordType),
    Other(u16),
}

impl QueryType {
    pub fn to_u16(&self) -> u16 {
        match self {
            QueryType::Known(rt) => rt.to_u16(),
            QueryType::Other(code) => *code,
        }
    }
}

impl From<u16> for QueryType {
    fn from(code: u16) -> Self {
        match RecordType::from_u16(code) {
            Some(rt) => QueryType::Known(rt),
            None => QueryType::Other(code),
        }
    }
}

impl From<RecordType> for QueryType {
    fn from(rt: RecordType) -> Self {
        QueryType::Known(rt)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Known(rt) => write!(f, "{}", rt),
            QueryType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

/// One question of an inbound request, name as received.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub query_type: QueryType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, query_type: impl Into<QueryType>) -> Self {
        Self {
            domain: domain.into(),
            query_type: query_type.into(),
        }
    }
}

/// Lowercases a name and gives it a trailing dot.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let mut normalized = trimmed.to_lowercase();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}
