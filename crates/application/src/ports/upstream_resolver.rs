use async_trait::async_trait;
use resolvr_domain::{DomainError, ResourceRecord};

/// Issues a single A query to the upstream resolver used for CNAME chasing.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Returns the A records of the upstream answer for `name`.
    ///
    /// Fails with `DomainError::UpstreamUnavailable` on network or protocol
    /// errors and `DomainError::QueryTimeout` when the upstream is silent.
    async fn resolve_a(&self, name: &str) -> Result<Vec<ResourceRecord>, DomainError>;
}
