use crate::ports::{QueryMetricsPort, UpstreamResolver};
use crate::services::StaticZone;
use resolvr_domain::{
    hostname_address, normalize_name, DnsQuery, DomainError, EmptyQuestionPolicy, QueryType,
    RecordType, ResourceRecord, LONG_TTL, SHORT_TTL,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_CHASE_TIMEOUT: Duration = Duration::from_millis(300);

/// Header flags set on every reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyFlags {
    pub authoritative: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
}

impl ReplyFlags {
    pub const AUTHORITATIVE: Self = Self {
        authoritative: true,
        recursion_desired: false,
        recursion_available: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    NoError,
    FormErr,
    NotImp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneResponse {
    pub answers: Vec<ResourceRecord>,
    pub flags: ReplyFlags,
    pub code: ReplyCode,
}

impl ZoneResponse {
    fn answer(answers: Vec<ResourceRecord>) -> Self {
        Self {
            answers,
            flags: ReplyFlags::AUTHORITATIVE,
            code: ReplyCode::NoError,
        }
    }

    fn empty(code: ReplyCode) -> Self {
        Self {
            answers: vec![],
            flags: ReplyFlags::AUTHORITATIVE,
            code,
        }
    }
}

/// Answers questions for the zone from the static tables, the upstream
/// CNAME chase, and hostname-encoded addresses.
pub struct ResolveQueryUseCase {
    zone: Arc<StaticZone>,
    upstream: Arc<dyn UpstreamResolver>,
    metrics: Arc<dyn QueryMetricsPort>,
    chase_timeout: Duration,
    empty_question: EmptyQuestionPolicy,
}

impl ResolveQueryUseCase {
    pub fn new(
        zone: Arc<StaticZone>,
        upstream: Arc<dyn UpstreamResolver>,
        metrics: Arc<dyn QueryMetricsPort>,
    ) -> Self {
        Self {
            zone,
            upstream,
            metrics,
            chase_timeout: DEFAULT_CHASE_TIMEOUT,
            empty_question: EmptyQuestionPolicy::default(),
        }
    }

    pub fn with_chase_timeout(mut self, timeout: Duration) -> Self {
        self.chase_timeout = timeout;
        self
    }

    pub fn with_empty_question_policy(mut self, policy: EmptyQuestionPolicy) -> Self {
        self.empty_question = policy;
        self
    }

    pub fn zone(&self) -> &StaticZone {
        &self.zone
    }

    /// Resolves the first question of a request. Further questions are ignored.
    pub async fn execute(&self, questions: &[DnsQuery]) -> ZoneResponse {
        self.metrics.record_request();

        let Some(query) = questions.first() else {
            debug!(policy = ?self.empty_question, "Request without question");
            return match self.empty_question {
                EmptyQuestionPolicy::Soa => ZoneResponse::answer(self.soa()),
                EmptyQuestionPolicy::FormErr => ZoneResponse::empty(ReplyCode::FormErr),
            };
        };

        let name = normalize_name(&query.domain);
        debug!(name = %name, query_type = %query.query_type, "Attempting to handle query");

        let answers = match query.query_type {
            QueryType::Known(RecordType::A) => self.resolve_a(&name).await,
            QueryType::Known(RecordType::AAAA) => {
                self.static_or_soa(self.zone.aaaa_record(&name))
            }
            QueryType::Known(RecordType::CNAME) => {
                self.static_or_soa(self.zone.cname_record(&name))
            }
            QueryType::Known(RecordType::NS) => self.zone.ns_records().to_vec(),
            QueryType::Known(RecordType::SOA) => self.soa(),
            QueryType::Other(code) => {
                self.metrics.record_unhandled_type();
                debug!(name = %name, code, "Unhandled query type, answering with SOA");
                self.soa()
            }
        };

        ZoneResponse::answer(answers)
    }

    /// Reply for requests whose opcode is not QUERY.
    pub fn not_implemented(&self) -> ZoneResponse {
        self.metrics.record_request();
        ZoneResponse::empty(ReplyCode::NotImp)
    }

    async fn resolve_a(&self, name: &str) -> Vec<ResourceRecord> {
        if let Some(cname) = self.zone.cname_record(name) {
            let mut answers = vec![cname.clone()];
            if let Some(target) = cname.cname_target() {
                answers.extend(self.chase_cname(name, target).await);
            }
            return answers;
        }

        if let Some(record) = self.zone.a_record(name) {
            return vec![record.clone()];
        }

        self.metrics.record_synthesized_a();
        let address = hostname_address::decode_or_fallback(name);
        vec![ResourceRecord::a(name, address, LONG_TTL)]
    }

    /// A records for the CNAME target, renamed to the queried name.
    /// Any upstream failure yields no records.
    async fn chase_cname(&self, name: &str, target: &str) -> Vec<ResourceRecord> {
        let outcome = tokio::time::timeout(self.chase_timeout, self.upstream.resolve_a(target))
            .await
            .unwrap_or(Err(DomainError::QueryTimeout));

        match outcome {
            Ok(records) => records
                .iter()
                .filter_map(ResourceRecord::ipv4)
                .map(|address| ResourceRecord::a(name, address, SHORT_TTL))
                .collect(),
            Err(e) => {
                warn!(name = %name, target = %target, error = %e, "CNAME chase failed");
                Vec::new()
            }
        }
    }

    fn static_or_soa(&self, record: Option<&ResourceRecord>) -> Vec<ResourceRecord> {
        match record {
            Some(record) => vec![record.clone()],
            None => self.soa(),
        }
    }

    fn soa(&self) -> Vec<ResourceRecord> {
        vec![self.zone.soa_record().clone()]
    }
}
