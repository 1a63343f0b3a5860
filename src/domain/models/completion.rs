use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TOP_P: f32 = 1.0;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Prompt strategy used for a request.
///
/// `Synthesis` asks the completion service to invent plausible structured
/// review data. `Retrieval` asks it for verbatim published feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    #[default]
    Synthesis,
    Retrieval,
}

impl PromptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptMode::Synthesis => "synthesis",
            PromptMode::Retrieval => "retrieval",
        }
    }
}

impl FromStr for PromptMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "synthesis" => Ok(PromptMode::Synthesis),
            "retrieval" => Ok(PromptMode::Retrieval),
            other => Err(DomainError::validation(format!(
                "unknown mode '{other}', expected one of: synthesis, retrieval"
            ))),
        }
    }
}

impl std::fmt::Display for PromptMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Json,
}

impl ResponseFormat {
    /// Value of the `response_format.type` field sent to the service.
    pub fn wire_type(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json_object",
        }
    }
}

/// Sampling parameters applied to every outbound completion.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl SamplingConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }
}

/// A single, fully rendered request for the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    system_prompt: String,
    user_content: String,
    mode: PromptMode,
    sampling: SamplingConfig,
    response_format: ResponseFormat,
}

impl CompletionRequest {
    pub fn new(
        system_prompt: String,
        user_content: String,
        mode: PromptMode,
        sampling: SamplingConfig,
    ) -> Self {
        Self {
            system_prompt,
            user_content,
            mode,
            sampling,
            response_format: ResponseFormat::Json,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn user_content(&self) -> &str {
        &self.user_content
    }

    pub fn mode(&self) -> PromptMode {
        self.mode
    }

    pub fn model(&self) -> &str {
        &self.sampling.model
    }

    pub fn temperature(&self) -> f32 {
        self.sampling.temperature
    }

    pub fn top_p(&self) -> f32 {
        self.sampling.top_p
    }

    pub fn max_tokens(&self) -> u32 {
        self.sampling.max_tokens
    }

    /// Streaming is never requested.
    pub fn stream(&self) -> bool {
        false
    }

    pub fn response_format(&self) -> ResponseFormat {
        self.response_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mode_from_str() {
        assert_eq!("Synthesis".parse::<PromptMode>().unwrap(), PromptMode::Synthesis);
        assert_eq!(" retrieval ".parse::<PromptMode>().unwrap(), PromptMode::Retrieval);
        assert!("guess".parse::<PromptMode>().unwrap_err().is_validation());
    }

    #[test]
    fn test_sampling_defaults() {
        let sampling = SamplingConfig::new("model-x");
        assert_eq!(sampling.top_p, 1.0);
        assert_eq!(sampling.max_tokens, 1024);
        assert_eq!(sampling.with_temperature(5.0).temperature, 2.0);
    }

    #[test]
    fn test_request_shape_is_fixed() {
        let request = CompletionRequest::new(
            "system".to_string(),
            "user".to_string(),
            PromptMode::Retrieval,
            SamplingConfig::new("model-x"),
        );

        assert!(!request.stream());
        assert_eq!(request.response_format().wire_type(), "json_object");
        assert_eq!(request.model(), "model-x");
        assert_eq!(request.mode(), PromptMode::Retrieval);
    }
}
