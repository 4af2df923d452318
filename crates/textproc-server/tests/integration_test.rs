//! End-to-end tests for the textproc HTTP API.
//!
//! Tests use `tower::ServiceExt::oneshot` to send requests directly to the
//! router without starting a network server.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use textproc_core::Locale;
use textproc_server::router::build_router;
use textproc_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::with_locale(Locale::En))
}

/// Sends a POST request with a raw body and returns (status, json).
async fn post_raw(
    app: &Router,
    path: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("POST").uri(path);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let response = app
        .clone()
        .oneshot(builder.body(body.into()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(
        app,
        path,
        Some("application/json"),
        serde_json::to_vec(&body).unwrap(),
    )
    .await
}

/// Sends a GET request and returns (status, content type, body text).
async fn get_text(app: &Router, path: &str) -> (StatusCode, String, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(body_bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// POST /api/process
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_uppercases_input() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/process", json!({ "input": "hello" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": "Processed: HELLO" }));
}

#[tokio::test]
async fn process_missing_input_is_empty() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/process", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Processed: ");
}

#[tokio::test]
async fn process_ignores_extra_fields() {
    let app = test_app();
    let (status, body) =
        post_json(&app, "/api/process", json!({ "input": "a", "extra": [1, 2] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Processed: A");
}

#[tokio::test]
async fn process_accepts_body_without_content_type() {
    let app = test_app();
    let (status, body) = post_raw(&app, "/api/process", None, r#"{"input":"x"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Processed: X");
}

#[tokio::test]
async fn process_rejects_malformed_json() {
    let app = test_app();
    let (status, body) =
        post_raw(&app, "/api/process", Some("application/json"), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn process_rejects_non_string_input() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/process", json!({ "input": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn process_rejects_non_object_body() {
    let app = test_app();
    for body in [json!(["hello"]), json!("hello"), json!(null), json!(7)] {
        let (status, resp) = post_json(&app, "/api/process", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body} was accepted");
        assert_eq!(resp["error"]["message"], "request body must be a JSON object");
    }
}

#[tokio::test]
async fn process_uses_configured_locale() {
    let app = build_router(AppState::with_locale(Locale::Ru));
    let (status, body) = post_json(&app, "/api/process", json!({ "input": "мир" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Обработано: МИР");
}

// ---------------------------------------------------------------------------
// Page and assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_contains_form_elements() {
    let app = test_app();
    let (status, content_type, html) = get_text(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(html.contains(r#"id="inputData""#));
    assert!(html.contains(r#"id="result""#));
    assert!(html.contains(r#"data-result-label="Result:""#));
    assert!(html.contains("/static/script.js"));
}

#[tokio::test]
async fn script_is_served_as_javascript() {
    let app = test_app();
    let (status, content_type, js) = get_text(&app, "/static/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/javascript"));
    assert!(js.contains("async function processData()"));
    assert!(js.contains("'/api/process'"));
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let app = test_app();
    let (status, content_type, _) = get_text(&app, "/static/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, _, body) = get_text(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "ok": true, "service": "textproc" }));
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let app = test_app();
    let (status, _, body) = get_text(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "/nope");
}

#[tokio::test]
async fn get_on_process_is_method_not_allowed() {
    let app = test_app();
    let (status, _, _) = get_text(&app, "/api/process").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
