use crate::dns::forwarding::RecordTypeMapper;
use crate::dns::record_mapper::RecordMapper;
use hickory_proto::op::{Header, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use resolvr_application::use_cases::{ReplyCode, ResolveQueryUseCase, ZoneResponse};
use resolvr_domain::DnsQuery;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Bridges hickory-server requests to [`ResolveQueryUseCase`].
#[derive(Clone)]
pub struct ZoneRequestHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl ZoneRequestHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    fn questions(request: &Request) -> Vec<DnsQuery> {
        request
            .queries()
            .iter()
            .map(|query| {
                DnsQuery::new(
                    query.name().to_string(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RequestHandler for ZoneRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        let op_code = request.header().op_code();
        let response = if op_code == OpCode::Query {
            let questions = Self::questions(request);
            self.use_case.execute(&questions).await
        } else {
            warn!(op_code = ?op_code, client = %request.src(), "Unsupported opcode");
            self.use_case.not_implemented()
        };

        send_response(request, response_handle, response).await
    }
}

fn response_code(code: ReplyCode) -> ResponseCode {
    match code {
        ReplyCode::NoError => ResponseCode::NoError,
        ReplyCode::FormErr => ResponseCode::FormErr,
        ReplyCode::NotImp => ResponseCode::NotImp,
    }
}

fn response_header(request_header: &Header, response: &ZoneResponse) -> Header {
    let mut header = Header::response_from_request(request_header);
    header
        .set_authoritative(response.flags.authoritative)
        .set_recursion_desired(response.flags.recursion_desired)
        .set_recursion_available(response.flags.recursion_available)
        .set_response_code(response_code(response.code));
    header
}

async fn send_response<R: ResponseHandler>(
    request: &Request,
    mut response_handle: R,
    response: ZoneResponse,
) -> ResponseInfo {
    let answers: Vec<Record> = response
        .answers
        .iter()
        .filter_map(|record| match RecordMapper::to_hickory(record) {
            Ok(record) => Some(record),
            Err(e) => {
                error!(error = %e, "Dropping answer that cannot be encoded");
                None
            }
        })
        .collect();

    debug!(answers = answers.len(), code = ?response.code, "Sending response");

    let header = response_header(request.header(), &response);
    let empty: &[Record] = &[];
    let builder = MessageResponseBuilder::from_message_request(request);
    let message = builder.build(
        header,
        answers.iter(),
        empty.iter(),
        empty.iter(),
        empty.iter(),
    );

    match response_handle.send_response(message).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(*request.header())
        }
    }
}
