//! Graph query handlers.
//!
//! Both queries run on the blocking pool since their cost grows with the
//! size of the reachable subgraph.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use kgraph_core::TraverseResult;
use std::sync::Arc;

use super::helpers::{json_body, run_blocking, validation_error, ApiError};
use crate::types::{ErrorResponse, PathQuery, PathResponse, TraverseRequest};
use crate::AppState;

/// Shortest directed path between two nodes.
///
/// The path is empty when the target is unreachable.
///
/// # Errors
///
/// Returns 400 for malformed ids and 404 if either node does not exist.
#[utoipa::path(
    get,
    path = "/graph/path",
    params(PathQuery),
    responses(
        (status = 200, description = "Shortest path, source first", body = PathResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Source or target node not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "graph"
)]
pub async fn find_path(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let (source_id, target_id) = query.validate().map_err(|e| validation_error(&e))?;
    let path = run_blocking("Path search", move || {
        state.service.find_path(source_id, target_id)
    })
    .await?;
    Ok(Json(PathResponse { path }))
}

/// Nodes and edges reachable from a start node within `depth` hops.
///
/// # Errors
///
/// Returns 400 if `startId` is malformed or `depth` is out of range, and 404
/// if the start node does not exist.
#[utoipa::path(
    post,
    path = "/graph/traverse",
    request_body = TraverseRequest,
    responses(
        (status = 200, description = "Traversal completed", body = TraverseResult),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Start node not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "graph"
)]
pub async fn traverse(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TraverseRequest>, JsonRejection>,
) -> Result<Json<TraverseResult>, ApiError> {
    let (start_id, depth) = json_body(body)?
        .validate(state.config.traversal)
        .map_err(|e| validation_error(&e))?;
    let result = run_blocking("Traversal", move || state.service.traverse(start_id, depth)).await?;
    tracing::debug!(
        %start_id,
        depth,
        nodes = result.nodes.len(),
        edges = result.edges.len(),
        "Traversal completed"
    );
    Ok(Json(result))
}
