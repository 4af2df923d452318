//! Liveness endpoint.

use axum::Json;

use crate::schema::health::HealthResponse;

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: "textproc",
    })
}
