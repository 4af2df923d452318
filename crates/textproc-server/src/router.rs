//! Router assembly for the textproc HTTP server.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use textproc_core::PROCESS_PATH;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// Unknown paths fall through to a JSON 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::assets::index))
        .route("/static/script.js", get(handlers::assets::script_js))
        .route("/static/style.css", get(handlers::assets::style_css))
        // API
        .route(PROCESS_PATH, post(handlers::process::process))
        .route("/health", get(handlers::health::health))
        .fallback(handlers::assets::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
