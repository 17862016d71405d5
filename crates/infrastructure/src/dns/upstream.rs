use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use resolvr_application::ports::UpstreamResolver;
use resolvr_domain::{DomainError, RecordType, ResourceRecord};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Single-server UDP client used for the CNAME chase.
///
/// No caching, no retries and no fallback servers.
pub struct HickoryUpstreamResolver {
    transport: UdpTransport,
    timeout: Duration,
}

impl HickoryUpstreamResolver {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server),
            timeout,
        }
    }

    pub fn server(&self) -> SocketAddr {
        self.transport.server_addr()
    }
}

#[async_trait]
impl UpstreamResolver for HickoryUpstreamResolver {
    async fn resolve_a(&self, name: &str) -> Result<Vec<ResourceRecord>, DomainError> {
        let (id, query) = MessageBuilder::build_query_with_id(name, &RecordType::A)?;

        debug!(name = %name, server = %self.server(), "Querying upstream");

        let bytes = self.transport.send(&query, self.timeout).await?;
        let response = ResponseParser::parse(&bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                response.id, id
            )));
        }

        if response.truncated {
            warn!(
                name = %name,
                server = %self.server(),
                answers = response.answers.len(),
                "Upstream reply truncated, using the answers it carries"
            );
        }

        if response.rcode == ResponseCode::NXDomain {
            debug!(name = %name, "Upstream has no such name");
            return Ok(Vec::new());
        }

        if response.rcode != ResponseCode::NoError {
            return Err(DomainError::UpstreamUnavailable(format!(
                "{} answered {} for {}",
                self.server(),
                ResponseParser::rcode_to_status(response.rcode),
                name
            )));
        }

        Ok(response
            .answers
            .into_iter()
            .filter(|record| record.record_type() == RecordType::A)
            .collect())
    }
}
