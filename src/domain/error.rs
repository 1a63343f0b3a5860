use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Empty completion: {0}")]
    EmptyCompletion(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// The request is well-formed but clashes with work already in flight.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn empty_completion(msg: impl Into<String>) -> Self {
        Self::EmptyCompletion(msg.into())
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Upstream(_) => ErrorKind::Upstream,
            Self::EmptyCompletion(_) => ErrorKind::EmptyCompletion,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::SchemaMismatch(_) => ErrorKind::SchemaMismatch,
            Self::IoError(_) => ErrorKind::Io,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Failures produced by the response parser. These are the only ones
    /// eligible for a bounded retry.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::MalformedResponse(_) | Self::SchemaMismatch(_))
    }

    /// Text safe to show to the person who submitted the form.
    ///
    /// Input and configuration problems are explained; everything else
    /// collapses into one generic notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Conflict(msg) | Self::Configuration(msg) => {
                msg.clone()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process request";

/// Payload-free discriminant of [`DomainError`], kept in the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Conflict,
    Configuration,
    Upstream,
    EmptyCompletion,
    MalformedResponse,
    SchemaMismatch,
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Upstream => "upstream",
            ErrorKind::EmptyCompletion => "empty_completion",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::SchemaMismatch => "schema_mismatch",
            ErrorKind::Io => "io",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            DomainError::validation("x").kind(),
            ErrorKind::Validation
        );
        assert_eq!(DomainError::conflict("x").kind(), ErrorKind::Conflict);
        assert!(!DomainError::conflict("x").is_validation());
        assert_eq!(
            DomainError::empty_completion("x").kind(),
            ErrorKind::EmptyCompletion
        );
        assert_eq!(
            DomainError::schema_mismatch("x").kind(),
            ErrorKind::SchemaMismatch
        );
    }

    #[test]
    fn test_parse_failures() {
        assert!(DomainError::malformed_response("x").is_parse_failure());
        assert!(DomainError::schema_mismatch("x").is_parse_failure());
        assert!(!DomainError::upstream("x").is_parse_failure());
        assert!(!DomainError::empty_completion("x").is_parse_failure());
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            DomainError::configuration("API key not configured.").user_message(),
            "API key not configured."
        );
        assert_eq!(
            DomainError::validation("company name is required").user_message(),
            "company name is required"
        );
        assert_eq!(
            DomainError::upstream("502 from upstream").user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }
}
