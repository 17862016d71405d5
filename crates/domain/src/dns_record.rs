mod record;
mod record_type;

pub use record::{RecordData, ResourceRecord, SoaData, LONG_TTL, SHORT_TTL};
pub use record_type::RecordType;
