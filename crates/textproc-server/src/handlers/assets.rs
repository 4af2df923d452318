//! Home page and static asset handlers.

use axum::extract::State;
use axum::http::header;
use axum::http::Uri;
use axum::response::{Html, IntoResponse};

use crate::error::ApiError;
use crate::schema::page::render_index;
use crate::state::AppState;

/// Serves the home page.
///
/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.locale()))
}

/// Serves the submit script.
///
/// `GET /static/script.js`
pub async fn script_js() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        include_str!("../../static/script.js"),
    )
}

/// Serves the page stylesheet.
///
/// `GET /static/style.css`
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/style.css"),
    )
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
