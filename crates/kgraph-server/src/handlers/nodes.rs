//! Node CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use kgraph_core::NodeResponse;
use std::sync::Arc;

use super::helpers::{domain_error, json_body, parse_node_id, validation_error, ApiError};
use crate::types::{CreateNodeRequest, DegreeResponse, ErrorResponse, UpdateNodeRequest};
use crate::AppState;

/// List all nodes in creation order.
#[utoipa::path(
    get,
    path = "/nodes",
    responses(
        (status = 200, description = "All nodes", body = [NodeResponse])
    ),
    tag = "nodes"
)]
pub async fn list_nodes(State(state): State<Arc<AppState>>) -> Json<Vec<NodeResponse>> {
    Json(state.service.list_nodes())
}

/// Create a node.
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
#[utoipa::path(
    post,
    path = "/nodes",
    request_body = CreateNodeRequest,
    responses(
        (status = 201, description = "Node created", body = NodeResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "nodes"
)]
pub async fn create_node(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateNodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NodeResponse>), ApiError> {
    let input = json_body(body)?
        .validate()
        .map_err(|e| validation_error(&e))?;
    let node = state.service.create_node(input);
    Ok((StatusCode::CREATED, Json(node)))
}

/// Get a node by id.
///
/// # Errors
///
/// Returns 400 for a malformed id and 404 if the node does not exist.
#[utoipa::path(
    get,
    path = "/nodes/{id}",
    params(("id" = String, Path, description = "Node UUID")),
    responses(
        (status = 200, description = "Node found", body = NodeResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Node not found", body = ErrorResponse)
    ),
    tag = "nodes"
)]
pub async fn get_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NodeResponse>, ApiError> {
    let id = parse_node_id(&id)?;
    state
        .service
        .get_node(id)
        .map(Json)
        .map_err(|e| domain_error(&e))
}

/// Update a node's title, summary or tags.
///
/// # Errors
///
/// Returns 400 on validation failure and 404 if the node does not exist.
#[utoipa::path(
    put,
    path = "/nodes/{id}",
    params(("id" = String, Path, description = "Node UUID")),
    request_body = UpdateNodeRequest,
    responses(
        (status = 200, description = "Node updated", body = NodeResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Node not found", body = ErrorResponse)
    ),
    tag = "nodes"
)]
pub async fn update_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateNodeRequest>, JsonRejection>,
) -> Result<Json<NodeResponse>, ApiError> {
    let id = parse_node_id(&id)?;
    let patch = json_body(body)?
        .validate()
        .map_err(|e| validation_error(&e))?;
    state
        .service
        .update_node(id, patch)
        .map(Json)
        .map_err(|e| domain_error(&e))
}

/// Delete a node and every edge touching it.
///
/// # Errors
///
/// Returns 400 for a malformed id and 404 if the node does not exist.
#[utoipa::path(
    delete,
    path = "/nodes/{id}",
    params(("id" = String, Path, description = "Node UUID")),
    responses(
        (status = 204, description = "Node deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Node not found", body = ErrorResponse)
    ),
    tag = "nodes"
)]
pub async fn delete_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_node_id(&id)?;
    state
        .service
        .delete_node(id)
        .map_err(|e| domain_error(&e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the number of incoming and outgoing edges of a node.
///
/// # Errors
///
/// Returns 400 for a malformed id and 404 if the node does not exist.
#[utoipa::path(
    get,
    path = "/nodes/{id}/degree",
    params(("id" = String, Path, description = "Node UUID")),
    responses(
        (status = 200, description = "Node degree", body = DegreeResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Node not found", body = ErrorResponse)
    ),
    tag = "nodes"
)]
pub async fn get_node_degree(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DegreeResponse>, ApiError> {
    let id = parse_node_id(&id)?;
    let (in_degree, out_degree) = state
        .service
        .node_degree(id)
        .map_err(|e| domain_error(&e))?;
    Ok(Json(DegreeResponse {
        in_degree,
        out_degree,
    }))
}
