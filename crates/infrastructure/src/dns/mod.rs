pub mod forwarding;
pub mod record_mapper;
pub mod server;
pub mod transport;
pub mod upstream;

pub use record_mapper::RecordMapper;
pub use server::ZoneRequestHandler;
pub use upstream::HickoryUpstreamResolver;
