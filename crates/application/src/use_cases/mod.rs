pub mod resolve_query;

pub use resolve_query::{
    ReplyCode, ReplyFlags, ResolveQueryUseCase, ZoneResponse, DEFAULT_CHASE_TIMEOUT,
};
