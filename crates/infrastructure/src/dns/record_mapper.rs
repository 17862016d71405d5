use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use resolvr_domain::{DomainError, RecordData, ResourceRecord, SoaData};
use std::str::FromStr;

/// Converts answer records to and from their hickory representation.
pub struct RecordMapper;

impl RecordMapper {
    pub fn to_hickory(record: &ResourceRecord) -> Result<Record, DomainError> {
        let name = parse_name(&record.name)?;
        let rdata = match &record.data {
            RecordData::A(addr) => RData::A(A(*addr)),
            RecordData::AAAA(addr) => RData::AAAA(AAAA(*addr)),
            RecordData::CNAME(target) => RData::CNAME(CNAME(parse_name(target)?)),
            RecordData::NS(host) => RData::NS(NS(parse_name(host)?)),
            RecordData::SOA(soa) => RData::SOA(SOA::new(
                parse_name(&soa.primary_ns)?,
                parse_name(&soa.mailbox)?,
                soa.serial,
                signed(soa.refresh),
                signed(soa.retry),
                signed(soa.expire),
                soa.minimum_ttl,
            )),
        };
        Ok(Record::from_rdata(name, record.ttl, rdata))
    }

    /// Returns `None` for record types the zone does not model.
    pub fn from_hickory(record: &Record) -> Option<ResourceRecord> {
        let name = record.name().to_string();
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(cname) => RecordData::CNAME(cname.0.to_string()),
            RData::NS(ns) => RecordData::NS(ns.0.to_string()),
            RData::SOA(soa) => RecordData::SOA(SoaData {
                primary_ns: soa.mname().to_string(),
                mailbox: soa.rname().to_string(),
                serial: soa.serial(),
                refresh: unsigned(soa.refresh()),
                retry: unsigned(soa.retry()),
                expire: unsigned(soa.expire()),
                minimum_ttl: soa.minimum(),
            }),
            _ => return None,
        };
        Some(ResourceRecord::new(name, record.ttl(), data))
    }
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid name '{}': {}", name, e)))
}

fn signed(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn unsigned(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
