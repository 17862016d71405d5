//! Mapping between resolvr record types and `hickory_proto::rr::RecordType`.

use hickory_proto::rr::RecordType as HickoryRecordType;
use resolvr_domain::{QueryType, RecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::SOA => HickoryRecordType::SOA,
        }
    }

    /// Types the zone does not serve keep their numeric code.
    pub fn from_hickory(record_type: HickoryRecordType) -> QueryType {
        match record_type {
            HickoryRecordType::A => QueryType::Known(RecordType::A),
            HickoryRecordType::AAAA => QueryType::Known(RecordType::AAAA),
            HickoryRecordType::CNAME => QueryType::Known(RecordType::CNAME),
            HickoryRecordType::NS => QueryType::Known(RecordType::NS),
            HickoryRecordType::SOA => QueryType::Known(RecordType::SOA),
            other => QueryType::Other(u16::from(other)),
        }
    }
}
