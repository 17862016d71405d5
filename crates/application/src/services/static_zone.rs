use chrono::{Datelike, Local, NaiveDate};
use resolvr_domain::{
    normalize_name, ResourceRecord, SoaData, ZoneConfig, ZoneError, LONG_TTL,
};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

const SOA_REFRESH: u32 = 86_400;
const SOA_RETRY: u32 = 7_200;
const SOA_EXPIRE: u32 = 3_600_000;
const SOA_MINIMUM_TTL: u32 = 172_800;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Immutable record tables for the zone, built once at startup.
///
/// Lookups expect names already normalized with [`normalize_name`].
#[derive(Debug, Clone)]
pub struct StaticZone {
    origin: String,
    a_records: FxHashMap<String, ResourceRecord>,
    aaaa_records: FxHashMap<String, ResourceRecord>,
    cname_records: FxHashMap<String, ResourceRecord>,
    ns_records: Vec<ResourceRecord>,
    soa_record: ResourceRecord,
}

impl StaticZone {
    /// Builds the tables with an SOA serial derived from today's date.
    pub fn from_config(config: &ZoneConfig) -> Result<Self, ZoneError> {
        Self::build(config, serial_for_date(Local::now().date_naive()))
    }

    /// Builds the tables.
    ///
    /// Configured A records win over the base-hostname record and over A
    /// records derived from nameserver entries when names collide.
    pub fn build(config: &ZoneConfig, serial: u32) -> Result<Self, ZoneError> {
        if config.hostname.trim().is_empty() {
            return Err(ZoneError::MissingHostname);
        }
        let origin = checked_name(&config.hostname)?;

        debug!(zone = %origin, serial, "Building static zone");

        let mut a_records = FxHashMap::default();
        for entry in &config.a_records {
            let name = checked_name(&entry.name)?;
            let address = parse_ipv4(&name, &entry.value)?;
            a_records.insert(name.clone(), ResourceRecord::a(name, address, LONG_TTL));
        }

        if let Some(value) = config.address.as_deref().filter(|v| !v.trim().is_empty()) {
            let address = parse_ipv4(&origin, value)?;
            insert_derived_a(&mut a_records, &origin, address);
        }

        let mut ns_records = Vec::with_capacity(config.nameservers.len());
        for nameserver in &config.nameservers {
            let name = checked_name(&nameserver.hostname)?;
            let address = parse_ipv4(&name, &nameserver.address)?;
            ns_records.push(ResourceRecord::ns(origin.clone(), name.clone(), LONG_TTL));
            insert_derived_a(&mut a_records, &name, address);
        }

        let mut aaaa_records = FxHashMap::default();
        for entry in &config.aaaa_records {
            let name = checked_name(&entry.name)?;
            let address = entry.value.trim().parse::<Ipv6Addr>().map_err(|_| {
                ZoneError::InvalidAddress {
                    name: name.clone(),
                    record_type: "AAAA",
                    value: entry.value.clone(),
                }
            })?;
            aaaa_records.insert(name.clone(), ResourceRecord::aaaa(name, address, LONG_TTL));
        }

        let mut cname_records = FxHashMap::default();
        for entry in &config.cname_records {
            let name = checked_name(&entry.name)?;
            let target = checked_name(&entry.value)?;
            cname_records.insert(name.clone(), ResourceRecord::cname(name, target, LONG_TTL));
        }

        let soa_record = ResourceRecord::soa(
            origin.clone(),
            SoaData {
                primary_ns: origin.clone(),
                mailbox: format!("admin.{}", origin),
                serial,
                refresh: SOA_REFRESH,
                retry: SOA_RETRY,
                expire: SOA_EXPIRE,
                minimum_ttl: SOA_MINIMUM_TTL,
            },
            LONG_TTL,
        );

        Ok(Self {
            origin,
            a_records,
            aaaa_records,
            cname_records,
            ns_records,
            soa_record,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn a_record(&self, name: &str) -> Option<&ResourceRecord> {
        self.a_records.get(name)
    }

    pub fn aaaa_record(&self, name: &str) -> Option<&ResourceRecord> {
        self.aaaa_records.get(name)
    }

    pub fn cname_record(&self, name: &str) -> Option<&ResourceRecord> {
        self.cname_records.get(name)
    }

    /// NS records in configuration order.
    pub fn ns_records(&self) -> &[ResourceRecord] {
        &self.ns_records
    }

    pub fn soa_record(&self) -> &ResourceRecord {
        &self.soa_record
    }

    pub fn stats(&self) -> ZoneStats {
        ZoneStats {
            a_records: self.a_records.len(),
            aaaa_records: self.aaaa_records.len(),
            cname_records: self.cname_records.len(),
            ns_records: self.ns_records.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneStats {
    pub a_records: usize,
    pub aaaa_records: usize,
    pub cname_records: usize,
    pub ns_records: usize,
}

/// SOA serial for a zone started on `date`: `YYYYMMDD * 100`.
///
/// Restarts on the same day reuse the same serial.
pub fn serial_for_date(date: NaiveDate) -> u32 {
    let yyyymmdd = date.year() as u32 * 10_000 + date.month() * 100 + date.day();
    yyyymmdd * 100
}

fn insert_derived_a(
    a_records: &mut FxHashMap<String, ResourceRecord>,
    name: &str,
    address: Ipv4Addr,
) {
    match a_records.entry(name.to_string()) {
        Entry::Occupied(existing) => {
            debug!(
                name = %name,
                configured = ?existing.get().ipv4(),
                derived = %address,
                "Configured A record shadows derived record"
            );
        }
        Entry::Vacant(slot) => {
            slot.insert(ResourceRecord::a(name, address, LONG_TTL));
        }
    }
}

fn checked_name(name: &str) -> Result<String, ZoneError> {
    let normalized = normalize_name(name);
    if normalized == "."
        || normalized.starts_with('.')
        || normalized.contains("..")
        || normalized.chars().any(char::is_whitespace)
    {
        return Err(ZoneError::InvalidName(name.to_string()));
    }

    let labels = normalized.trim_end_matches('.');
    if labels.len() > MAX_NAME_LEN
        || labels.split('.').any(|label| label.len() > MAX_LABEL_LEN)
    {
        return Err(ZoneError::InvalidName(name.to_string()));
    }
    Ok(normalized)
}

fn parse_ipv4(name: &str, value: &str) -> Result<Ipv4Addr, ZoneError> {
    value
        .trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| ZoneError::InvalidAddress {
            name: name.to_string(),
            record_type: "A",
            value: value.to_string(),
        })
}
