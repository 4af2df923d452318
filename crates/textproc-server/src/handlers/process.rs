//! The process endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use textproc_core::{process_data, ProcessRequest, ProcessResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Processes the submitted text.
///
/// `POST /api/process`
///
/// The body is decoded as JSON regardless of the request's content type.
/// It must be a JSON object; a missing `input` field is processed as the
/// empty string.
pub async fn process(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(&body)?;
    if !value.is_object() {
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    }
    let req: ProcessRequest = serde_json::from_value(value)?;
    tracing::debug!(input_len = req.input.len(), "processing input");

    Ok(Json(ProcessResponse {
        result: process_data(&req.input, state.locale()),
    }))
}
