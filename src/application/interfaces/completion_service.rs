use async_trait::async_trait;

use crate::domain::{CompletionRequest, DomainError};

/// Sends a rendered prompt to a text-completion service and returns the raw
/// text of the first choice.
///
/// Implementors own transport, authentication and vendor-specific request
/// encoding. They must not retry: every failure is reported to the caller.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Issue exactly one completion call.
    ///
    /// Returns `EmptyCompletion` when the service answers without text,
    /// `Upstream` on transport or non-success status, and `Configuration`
    /// when credentials are missing.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;

    /// Name of the backing model, for logging.
    fn model_name(&self) -> &str;
}
