use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::connector::api::Container;
use crate::domain::{PromptMode, QueryForm, ReviewResult};

use super::error::ApiError;

/// Body of `POST /api/result`: the form fields plus an optional prompt mode.
#[derive(Debug, Deserialize)]
pub struct ResultRequest {
    #[serde(flatten)]
    pub form: QueryForm,

    #[serde(default)]
    pub mode: Option<String>,
}

pub async fn create_result(
    State(container): State<Arc<Container>>,
    payload: Result<Json<ResultRequest>, JsonRejection>,
) -> Result<Json<ReviewResult>, ApiError> {
    let request_id = Uuid::new_v4();
    let default_mode = container.mode();

    let Json(request) = payload.map_err(|e| {
        warn!("[{}] Rejected request body: {}", request_id, e.body_text());
        ApiError::bad_request(e.body_text(), default_mode)
    })?;

    let mode = match request.mode.as_deref().map(str::trim) {
        None | Some("") => default_mode,
        Some(raw) => raw
            .parse::<PromptMode>()
            .map_err(|e| ApiError::from_domain(&e, default_mode))?,
    };

    let start_time = Instant::now();
    let use_case = container.generate_use_case();

    match use_case.execute(request.form, Some(mode)).await {
        Ok(result) => {
            info!(
                "[{}] POST /api/result 200 ({} mode) in {:.2}s",
                request_id,
                mode,
                start_time.elapsed().as_secs_f64()
            );
            Ok(Json(result))
        }
        Err(e) => {
            let api_error = ApiError::from_domain(&e, mode);
            warn!(
                "[{}] POST /api/result {} ({}): {}",
                request_id,
                api_error.status().as_u16(),
                e.kind(),
                e
            );
            Err(api_error)
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
