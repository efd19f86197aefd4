use async_trait::async_trait;

use crate::domain::{DomainError, ModelRequest};

/// An interface for sending a schema-constrained prompt to a generative model
/// and receiving the raw text of its reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (the three use cases) stay decoupled from any
/// particular provider or HTTP client library.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send one request and return the model's text payload.
    ///
    /// The payload is expected to contain a JSON document plus possible
    /// surrounding whitespace; interpreting it is the caller's job. Transport
    /// failures and non-success upstream statuses surface as
    /// [`DomainError::NetworkError`].
    async fn generate(&self, request: &ModelRequest) -> Result<String, DomainError>;
}
