use crate::dns::record_mapper::RecordMapper;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use resolvr_domain::{DomainError, ResourceRecord};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer records the zone can model; anything else is dropped.
    pub answers: Vec<ResourceRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<UpstreamResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Message is not a response".to_string(),
            ));
        }

        let answers: Vec<ResourceRecord> = message
            .answers()
            .iter()
            .filter_map(RecordMapper::from_hickory)
            .collect();

        debug!(
            rcode = ?message.response_code(),
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(UpstreamResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
