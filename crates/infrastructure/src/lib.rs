//! resolvr infrastructure: hickory wire adapters, upstream client and metrics.
pub mod dns;
pub mod metrics;
