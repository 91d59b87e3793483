//! Shared helpers for API integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use kgraph_core::KgConfig;
use kgraph_server::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Creates an app over an empty graph with default configuration.
pub fn create_test_app() -> Router {
    create_test_app_with(KgConfig::default())
}

/// Creates an app over an empty graph with `config`.
pub fn create_test_app_with(config: KgConfig) -> Router {
    build_router(Arc::new(AppState::new(config)))
}

/// Sends a request with an optional JSON body and returns status and parsed body.
///
/// Empty bodies parse as `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Invalid JSON")
    };
    (status, json)
}

/// Sends a raw (possibly malformed) JSON body.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Creates a node and returns its id.
pub async fn create_node(app: &Router, title: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/nodes",
        Some(serde_json::json!({ "title": title, "summary": format!("{title} summary") })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("node id").to_string()
}

/// Creates an edge and returns its id.
pub async fn create_edge(app: &Router, source: &str, target: &str, kind: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/edges",
        Some(serde_json::json!({ "type": kind, "sourceId": source, "targetId": target })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("edge id").to_string()
}
