use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{GenerateReviewsUseCase, ResultRepository, ViewModelStore};
use crate::domain::{DomainError, PromptMode, QueryForm};

/// The form step: drives the store through `Loading` into `Ready` or
/// `Failed` around one pipeline run.
pub struct SubmitQueryUseCase {
    generate: Arc<GenerateReviewsUseCase>,
    result_repo: Option<Arc<dyn ResultRepository>>,
}

impl SubmitQueryUseCase {
    pub fn new(generate: Arc<GenerateReviewsUseCase>) -> Self {
        Self {
            generate,
            result_repo: None,
        }
    }

    pub fn with_result_repository(mut self, repo: Arc<dyn ResultRepository>) -> Self {
        self.result_repo = Some(repo);
        self
    }

    /// Load a mirrored result into a fresh store, if one exists.
    pub async fn restore(&self) -> Result<ViewModelStore, DomainError> {
        let restored = match self.result_repo {
            Some(ref repo) => repo.load().await?,
            None => None,
        };

        Ok(match restored {
            Some(result) => {
                info!("Restored {} result from session", result.mode());
                ViewModelStore::with_result(result)
            }
            None => ViewModelStore::new(),
        })
    }

    pub async fn execute(
        &self,
        store: &mut ViewModelStore,
        form: QueryForm,
        mode: Option<PromptMode>,
    ) -> Result<(), DomainError> {
        store.begin_loading()?;

        match self.generate.execute(form, mode).await {
            Ok(result) => {
                if let Some(ref repo) = self.result_repo {
                    if let Err(e) = repo.save(&result).await {
                        warn!("Failed to mirror result to session: {}", e);
                    }
                }
                store.complete(result);
                debug!("View state: {}", store.state().label());
                Ok(())
            }
            Err(e) => {
                store.fail(e.kind());
                debug!("View state: {}", store.state().label());
                Err(e)
            }
        }
    }

    /// Start over: empty the store and drop the mirrored result.
    pub async fn reset(&self, store: &mut ViewModelStore) -> Result<(), DomainError> {
        if store.is_loading() {
            return Err(DomainError::conflict("a submission is already in progress"));
        }

        store.reset();
        if let Some(ref repo) = self.result_repo {
            repo.clear().await?;
            info!("Cleared mirrored session result");
        }
        Ok(())
    }
}
