use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ResultRepository;
use crate::domain::{DomainError, ReviewResult};

/// Mirrors the last result to a JSON file so a later `result` invocation in
/// the same session can render it.
pub struct JsonFileResultRepository {
    path: PathBuf,
}

impl JsonFileResultRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResultRepository for JsonFileResultRepository {
    async fn save(&self, result: &ReviewResult) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(result)
            .map_err(|e| DomainError::schema_mismatch(format!("Failed to encode result: {}", e)))?;
        tokio::fs::write(&self.path, json).await?;

        debug!("Mirrored result to {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> Result<Option<ReviewResult>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let result: ReviewResult = serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::schema_mismatch(format!(
                "Session file {} is not a review result: {}",
                self.path.display(),
                e
            ))
        })?;
        result.validate()?;

        Ok(Some(result))
    }

    async fn clear(&self) -> Result<(), DomainError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{sample_analytical_result, sample_review_result};

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileResultRepository::new(dir.path().join("session.json"));
        assert!(repo.load().await.unwrap().is_none());
        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileResultRepository::new(dir.path().join("nested").join("session.json"));

        for result in [sample_review_result(), sample_analytical_result()] {
            repo.save(&result).await.unwrap();
            assert_eq!(repo.load().await.unwrap(), Some(result));
        }

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_schema_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"{\"unexpected\": true}").unwrap();

        let err = JsonFileResultRepository::new(path).load().await.unwrap_err();
        assert!(matches!(err, DomainError::SchemaMismatch(_)));
    }
}
