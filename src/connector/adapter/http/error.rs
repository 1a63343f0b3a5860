use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::domain::{DomainError, PromptMode, VerbatimReview};

/// Failure body for `POST /api/result`.
///
/// In retrieval mode a 500 also carries an empty verbatim result so that
/// clients expecting that shape can still render something.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    mode: PromptMode,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, mode: PromptMode) -> Self {
        Self {
            status,
            message: message.into(),
            mode,
        }
    }

    pub fn bad_request(message: impl Into<String>, mode: PromptMode) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, mode)
    }

    pub fn from_domain(error: &DomainError, mode: PromptMode) -> Self {
        let status = match error {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.user_message(), mode)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn body(&self) -> Value {
        let mut body = json!({ "error": self.message });

        if self.status.is_server_error() && self.mode == PromptMode::Retrieval {
            if let (Some(map), Ok(Value::Object(fallback))) = (
                body.as_object_mut(),
                serde_json::to_value(VerbatimReview::error_placeholder()),
            ) {
                map.extend(fallback);
            }
        }

        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}
