use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::CompletionService;
use crate::domain::{CompletionRequest, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";
pub const MODEL_VAR: &str = "GROQ_MODEL";

/// Message shown to users when the service credential is missing.
pub const API_KEY_NOT_CONFIGURED: &str =
    "API key not configured. Set GROQ_API_KEY in the server environment.";

/// Values shipped in `.env` templates that are not real keys.
const PLACEHOLDER_KEYS: &[&str] = &[
    "your_api_key_here",
    "your-api-key",
    "your_groq_api_key",
    "changeme",
    "placeholder",
];

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_completion_tokens: u32,
    top_p: f32,
    stream: bool,
    response_format: ApiResponseFormat<'a>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ApiResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible chat completion endpoints, Groq by
/// default.
///
/// Configured from the environment:
///
/// | Variable        | Default                          |
/// |-----------------|----------------------------------|
/// | `GROQ_API_KEY`  | none, required                   |
/// | `GROQ_BASE_URL` | `https://api.groq.com/openai`    |
/// | `GROQ_MODEL`    | `deepseek-r1-distill-llama-70b`  |
///
/// A missing or placeholder key is reported as a configuration error on the
/// first call, before any network traffic.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    pub fn from_env() -> Self {
        let base =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let key = std::env::var(API_KEY_VAR).unwrap_or_default();
        Self::new(key, model, base)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_configured(&self) -> bool {
        is_usable_api_key(&self.api_key)
    }
}

pub fn is_usable_api_key(key: &str) -> bool {
    let key = key.trim();
    if key.is_empty() || (key.starts_with('<') && key.ends_with('>')) {
        return false;
    }
    !PLACEHOLDER_KEYS
        .iter()
        .any(|placeholder| key.eq_ignore_ascii_case(placeholder))
}

#[async_trait]
impl CompletionService for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        if !self.is_configured() {
            return Err(DomainError::configuration(API_KEY_NOT_CONFIGURED));
        }

        let body = ApiRequest {
            model: request.model(),
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: request.system_prompt(),
                },
                ApiMessage {
                    role: "user",
                    content: request.user_content(),
                },
            ],
            temperature: request.temperature(),
            max_completion_tokens: request.max_tokens(),
            top_p: request.top_p(),
            stream: request.stream(),
            response_format: ApiResponseFormat {
                kind: request.response_format().wire_type(),
            },
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("GroqClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GroqClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "GroqClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("GroqClient: failed to decode response: {e}"))
        })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::empty_completion("GroqClient: response has no choices"))?;

        debug!(
            "GroqClient: finish_reason={}",
            choice.finish_reason.as_deref().unwrap_or("unknown")
        );

        match choice.message.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(DomainError::empty_completion(format!(
                "GroqClient: no content returned (finish_reason={})",
                choice.finish_reason.as_deref().unwrap_or("unknown")
            ))),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
