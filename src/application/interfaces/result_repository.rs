use async_trait::async_trait;

use crate::domain::{DomainError, ReviewResult};

/// Session-scoped mirror of the last successful result.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn save(&self, result: &ReviewResult) -> Result<(), DomainError>;

    /// Returns `None` when nothing has been mirrored yet.
    async fn load(&self) -> Result<Option<ReviewResult>, DomainError>;

    async fn clear(&self) -> Result<(), DomainError>;
}
