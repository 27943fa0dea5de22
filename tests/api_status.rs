//! Public endpoint integration tests
//!
//! Greeting, status checks, the JSON 404 fallback and CORS.

mod common;

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{test_app, test_app_with_config, test_config};

#[tokio::test]
async fn test_root_greeting() {
    let app = test_app().await;

    for path in ["/api", "/api/"] {
        let body: Value = app.server.get(path).await.json();
        assert_eq!(body, json!({ "message": "Hello World" }));
    }
}

#[tokio::test]
async fn test_status_checks_roundtrip() {
    let app = test_app().await;

    let created = app
        .server
        .post("/api/status")
        .json(&json!({ "client_name": "frontend" }))
        .await;
    created.assert_status_ok();
    let created: Value = created.json();
    assert_eq!(created["client_name"], "frontend");
    assert!(created["id"].as_str().is_some());
    assert!(created["timestamp"].as_str().is_some());

    let listed: Value = app.server.get("/api/status").await.json();
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = test_app().await;

    let response = app.server.get("/api/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = test_app().await;

    let response = app
        .server
        .get("/api/")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://somewhere.example"),
        )
        .await;

    assert_eq!(
        response.header("access-control-allow-origin"),
        HeaderValue::from_static("*")
    );
}

#[tokio::test]
async fn test_cors_with_explicit_origins() {
    let mut config = test_config();
    config.cors_origins = vec!["https://chat.example".to_string()];
    let app = test_app_with_config(config).await;

    let response = app
        .server
        .method(Method::OPTIONS, "/api/chats")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://chat.example"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .await;

    assert_eq!(
        response.header("access-control-allow-origin"),
        HeaderValue::from_static("https://chat.example")
    );
    assert_eq!(
        response.header("access-control-allow-credentials"),
        HeaderValue::from_static("true")
    );
}
