//! Service status endpoints.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::types::{HealthResponse, IndexResponse};
use crate::AppState;

/// Service name reported by `/` and `/health`.
pub const SERVICE_NAME: &str = "kgraph";

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.service.stats();
    Json(HealthResponse {
        service: SERVICE_NAME.to_string(),
        status: "ok".to_string(),
        timestamp: kgraph_core::graph::format_timestamp(chrono::Utc::now()),
        environment: state.config.environment.clone(),
        nodes: stats.nodes,
        edges: stats.edges,
    })
}

/// Root endpoint listing the resource paths.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = IndexResponse)
    ),
    tag = "health"
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: SERVICE_NAME.to_string(),
        message: "Knowledge graph API is running".to_string(),
        docs: vec![
            "/health".to_string(),
            "/nodes".to_string(),
            "/edges".to_string(),
            "/graph".to_string(),
        ],
    })
}
