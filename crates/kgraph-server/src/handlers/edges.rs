//! Edge CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use kgraph_core::EdgeResponse;
use std::sync::Arc;

use super::helpers::{domain_error, json_body, parse_edge_id, validation_error, ApiError};
use crate::types::{CreateEdgeRequest, ErrorResponse, UpdateEdgeRequest};
use crate::AppState;

/// List all edges in creation order.
#[utoipa::path(
    get,
    path = "/edges",
    responses(
        (status = 200, description = "All edges", body = [EdgeResponse])
    ),
    tag = "edges"
)]
pub async fn list_edges(State(state): State<Arc<AppState>>) -> Json<Vec<EdgeResponse>> {
    Json(state.service.list_edges())
}

/// Create a relationship between two existing, distinct nodes.
///
/// # Errors
///
/// Returns 400 on validation failure, 404 if an endpoint is missing and
/// 409 if source and target are the same node.
#[utoipa::path(
    post,
    path = "/edges",
    request_body = CreateEdgeRequest,
    responses(
        (status = 201, description = "Edge created", body = EdgeResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Source or target node not found", body = ErrorResponse),
        (status = 409, description = "Self-referencing relationship", body = ErrorResponse)
    ),
    tag = "edges"
)]
pub async fn create_edge(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateEdgeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EdgeResponse>), ApiError> {
    let input = json_body(body)?
        .validate()
        .map_err(|e| validation_error(&e))?;
    let edge = state
        .service
        .create_edge(input)
        .map_err(|e| domain_error(&e))?;
    Ok((StatusCode::CREATED, Json(edge)))
}

/// Get an edge by id.
///
/// # Errors
///
/// Returns 400 for a malformed id and 404 if the edge does not exist.
#[utoipa::path(
    get,
    path = "/edges/{id}",
    params(("id" = String, Path, description = "Edge UUID")),
    responses(
        (status = 200, description = "Edge found", body = EdgeResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Edge not found", body = ErrorResponse)
    ),
    tag = "edges"
)]
pub async fn get_edge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EdgeResponse>, ApiError> {
    let id = parse_edge_id(&id)?;
    state
        .service
        .get_edge(id)
        .map(Json)
        .map_err(|e| domain_error(&e))
}

/// Change an edge's type or description. A `null` description clears it.
///
/// # Errors
///
/// Returns 400 on validation failure and 404 if the edge does not exist.
#[utoipa::path(
    put,
    path = "/edges/{id}",
    params(("id" = String, Path, description = "Edge UUID")),
    request_body = UpdateEdgeRequest,
    responses(
        (status = 200, description = "Edge updated", body = EdgeResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Edge not found", body = ErrorResponse)
    ),
    tag = "edges"
)]
pub async fn update_edge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateEdgeRequest>, JsonRejection>,
) -> Result<Json<EdgeResponse>, ApiError> {
    let id = parse_edge_id(&id)?;
    let patch = json_body(body)?
        .validate()
        .map_err(|e| validation_error(&e))?;
    state
        .service
        .update_edge(id, patch)
        .map(Json)
        .map_err(|e| domain_error(&e))
}

/// Delete an edge.
///
/// # Errors
///
/// Returns 400 for a malformed id and 404 if the edge does not exist.
#[utoipa::path(
    delete,
    path = "/edges/{id}",
    params(("id" = String, Path, description = "Edge UUID")),
    responses(
        (status = 204, description = "Edge deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Edge not found", body = ErrorResponse)
    ),
    tag = "edges"
)]
pub async fn delete_edge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_edge_id(&id)?;
    state
        .service
        .delete_edge(id)
        .map_err(|e| domain_error(&e))?;
    Ok(StatusCode::NO_CONTENT)
}
