use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::CompletionService;
use crate::domain::{
    build_completion_request, parse_review_result, DomainError, PromptMode, Query, QueryForm,
    ReviewResult, SamplingConfig,
};

/// Total completion calls allowed when the parser rejects a response.
pub const DEFAULT_MAX_PARSE_ATTEMPTS: u32 = 2;

/// Runs the review pipeline: validate the form, render the prompt, call the
/// completion service, then parse and schema-check the answer.
pub struct GenerateReviewsUseCase {
    completion_service: Arc<dyn CompletionService>,
    sampling: SamplingConfig,
    default_mode: PromptMode,
    max_parse_attempts: u32,
}

impl GenerateReviewsUseCase {
    pub fn new(completion_service: Arc<dyn CompletionService>, sampling: SamplingConfig) -> Self {
        Self {
            completion_service,
            sampling,
            default_mode: PromptMode::default(),
            max_parse_attempts: DEFAULT_MAX_PARSE_ATTEMPTS,
        }
    }

    pub fn with_default_mode(mut self, mode: PromptMode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn with_max_parse_attempts(mut self, attempts: u32) -> Self {
        self.max_parse_attempts = attempts.max(1);
        self
    }

    pub fn default_mode(&self) -> PromptMode {
        self.default_mode
    }

    pub async fn execute(
        &self,
        form: QueryForm,
        mode: Option<PromptMode>,
    ) -> Result<ReviewResult, DomainError> {
        let query = form.build()?;
        self.execute_query(&query, mode.unwrap_or(self.default_mode))
            .await
    }

    pub async fn execute_query(
        &self,
        query: &Query,
        mode: PromptMode,
    ) -> Result<ReviewResult, DomainError> {
        info!(
            "Generating reviews for {} (mode={}, model={})",
            query.summary(),
            mode,
            self.completion_service.model_name()
        );

        let start_time = Instant::now();
        let request = build_completion_request(query, mode, &self.sampling);

        let mut attempt = 1;
        let result = loop {
            let raw = self.completion_service.complete(&request).await?;
            if raw.trim().is_empty() {
                return Err(DomainError::empty_completion(
                    "completion service returned no content",
                ));
            }
            debug!("Raw completion ({} bytes): {}", raw.len(), raw);

            match parse_review_result(&raw, mode) {
                Ok(result) => break result,
                Err(e) if e.is_parse_failure() && attempt < self.max_parse_attempts => {
                    warn!(
                        "Attempt {}/{} produced an unusable response: {}. Retrying.",
                        attempt, self.max_parse_attempts, e
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        info!(
            "Generated {} result in {:.2}s ({} attempt(s))",
            mode,
            start_time.elapsed().as_secs_f64(),
            attempt
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockCompletion;

    const VERBATIM: &str = r#"{"company_name":"Acme","good_reviews":["x"],"bad_reviews":[]}"#;

    fn use_case(mock: Arc<MockCompletion>) -> GenerateReviewsUseCase {
        GenerateReviewsUseCase::new(mock, SamplingConfig::new("mock-model"))
            .with_default_mode(PromptMode::Retrieval)
    }

    #[tokio::test]
    async fn test_validation_happens_before_any_call() {
        let mock = Arc::new(MockCompletion::new());
        let err = use_case(mock.clone())
            .execute(QueryForm::new("", "1 Main St"), None)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(mock.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_retries_once_on_malformed_response() {
        let mock = Arc::new(MockCompletion::new().with_responses(["{not json", VERBATIM]));
        let result = use_case(mock.clone())
            .execute(QueryForm::new("Acme", "1 Main St"), None)
            .await
            .unwrap();

        assert_eq!(result.as_verbatim().unwrap().company_name, "Acme");
        assert_eq!(mock.call_count().await, 2);
    }

    #[tokio::test]
    async fn test_retry_is_bounded() {
        let mock = Arc::new(MockCompletion::new().with_responses(["{", "{", "{"]));
        let err = use_case(mock.clone())
            .execute(QueryForm::new("Acme", "1 Main St"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::MalformedResponse(_)));
        assert_eq!(mock.call_count().await, DEFAULT_MAX_PARSE_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn test_single_attempt_when_retry_disabled() {
        let mock = Arc::new(MockCompletion::new().with_responses(["{", VERBATIM]));
        let err = use_case(mock.clone())
            .with_max_parse_attempts(1)
            .execute(QueryForm::new("Acme", "1 Main St"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::MalformedResponse(_)));
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_explicit_mode_overrides_default() {
        let mock = Arc::new(MockCompletion::new().with_responses([VERBATIM]));
        let err = use_case(mock.clone())
            .execute(QueryForm::new("Acme", "1 Main St"), Some(PromptMode::Synthesis))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::SchemaMismatch(_)));
        let requests = mock.requests().await;
        assert_eq!(requests[0].mode(), PromptMode::Synthesis);
    }
}
