use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::{
    CompletionService, GenerateReviewsUseCase, ResultRepository, SubmitQueryUseCase,
    ViewModelStore, DEFAULT_MAX_PARSE_ATTEMPTS,
};
use crate::connector::adapter::{GroqClient, JsonFileResultRepository, MockCompletion};
use crate::domain::{PromptMode, SamplingConfig, DEFAULT_TEMPERATURE};

pub struct ContainerConfig {
    /// Prompt mode used when a request does not name one.
    pub mode: PromptMode,
    pub temperature: f32,
    /// Completion calls allowed per query when the response cannot be parsed.
    pub max_parse_attempts: u32,
    /// Answer from the scripted mock instead of calling the completion service.
    pub mock_completion: bool,
    /// Mirror the last successful result to this JSON file.
    pub session_file: Option<PathBuf>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            mode: PromptMode::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_parse_attempts: DEFAULT_MAX_PARSE_ATTEMPTS,
            mock_completion: false,
            session_file: None,
        }
    }
}

pub struct Container {
    generate_use_case: Arc<GenerateReviewsUseCase>,
    result_repo: Option<Arc<dyn ResultRepository>>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let completion_service: Arc<dyn CompletionService> = if config.mock_completion {
            debug!("Using mock completion service");
            Arc::new(MockCompletion::new())
        } else {
            let client = GroqClient::from_env();
            if !client.is_configured() {
                // Requests will fail with a configuration error until the key is set.
                warn!("GROQ_API_KEY is not configured");
            }
            debug!("Using completion endpoint {}", client.url());
            Arc::new(client)
        };

        Ok(Self::with_completion_service(config, completion_service))
    }

    /// Build a container around an existing completion service.
    pub fn with_completion_service(
        config: ContainerConfig,
        completion_service: Arc<dyn CompletionService>,
    ) -> Self {
        let sampling = SamplingConfig::new(completion_service.model_name())
            .with_temperature(config.temperature);

        let generate_use_case = Arc::new(
            GenerateReviewsUseCase::new(completion_service, sampling)
                .with_default_mode(config.mode)
                .with_max_parse_attempts(config.max_parse_attempts),
        );

        let result_repo = config.session_file.as_ref().map(|path| {
            debug!("Mirroring results to {}", path.display());
            Arc::new(JsonFileResultRepository::new(path.clone())) as Arc<dyn ResultRepository>
        });

        Self {
            generate_use_case,
            result_repo,
            config,
        }
    }

    pub fn generate_use_case(&self) -> Arc<GenerateReviewsUseCase> {
        self.generate_use_case.clone()
    }

    pub fn submit_use_case(&self) -> SubmitQueryUseCase {
        let use_case = SubmitQueryUseCase::new(self.generate_use_case.clone());

        match self.result_repo.clone() {
            Some(repo) => use_case.with_result_repository(repo),
            None => use_case,
        }
    }

    /// A store primed from the session mirror, or an empty one.
    pub async fn view_model_store(&self) -> Result<ViewModelStore> {
        Ok(self.submit_use_case().restore().await?)
    }

    pub fn mode(&self) -> PromptMode {
        self.config.mode
    }

    pub fn session_file(&self) -> Option<&PathBuf> {
        self.config.session_file.as_ref()
    }
}
