use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// TTL for statically configured records and hostname-synthesized A records.
pub const LONG_TTL: u32 = 60 * 60 * 24 * 7;

/// TTL for A records synthesized from an upstream CNAME chase.
pub const SHORT_TTL: u32 = 60 * 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub primary_ns: String,
    pub mailbox: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum_ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    NS(String),
    SOA(SoaData),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::NS(_) => RecordType::NS,
            RecordData::SOA(_) => RecordType::SOA,
        }
    }
}

/// A single answer entry. The class is always `IN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn a(name: impl Into<String>, address: Ipv4Addr, ttl: u32) -> Self {
        Self::new(name, ttl, RecordData::A(address))
    }

    pub fn aaaa(name: impl Into<String>, address: Ipv6Addr, ttl: u32) -> Self {
        Self::new(name, ttl, RecordData::AAAA(address))
    }

    pub fn cname(name: impl Into<String>, target: impl Into<String>, ttl: u32) -> Self {
        Self::new(name, ttl, RecordData::CNAME(target.into()))
    }

    pub fn ns(name: impl Into<String>, nameserver: impl Into<String>, ttl: u32) -> Self {
        Self::new(name, ttl, RecordData::NS(nameserver.into()))
    }

    pub fn soa(name: impl Into<String>, soa: SoaData, ttl: u32) -> Self {
        Self::new(name, ttl, RecordData::SOA(soa))
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn cname_target(&self) -> Option<&str> {
        match &self.data {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        }
    }
}
