#![allow(clippy::doc_markdown)]
//! `kgraph` Server - REST API for the in-memory knowledge graph.
//!
//! Exposes node and edge CRUD plus shortest-path and neighborhood queries
//! over a shared [`GraphService`]. All state lives in memory.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use kgraph_core::{GraphService, KgConfig};
use std::sync::Arc;
use utoipa::OpenApi;

pub mod handlers;
pub mod types;

pub use handlers::{
    create_edge, create_node, delete_edge, delete_node, find_path, get_edge, get_node,
    get_node_degree, health_check, index, list_edges, list_nodes, traverse, update_edge,
    update_node,
};
pub use types::{ErrorResponse, ValidationErrors};

/// Application state shared by every handler.
pub struct AppState {
    /// Graph store and operations.
    pub service: GraphService,
    /// Resolved configuration.
    pub config: KgConfig,
}

impl AppState {
    /// Creates state with an empty graph.
    #[must_use]
    pub fn new(config: KgConfig) -> Self {
        Self {
            service: GraphService::default(),
            config,
        }
    }
}

/// OpenAPI documentation for the kgraph REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "kgraph API",
        description = "In-memory knowledge graph: concepts, typed relationships and graph queries"
    ),
    paths(
        handlers::health::index,
        handlers::health::health_check,
        handlers::nodes::list_nodes,
        handlers::nodes::create_node,
        handlers::nodes::get_node,
        handlers::nodes::update_node,
        handlers::nodes::delete_node,
        handlers::nodes::get_node_degree,
        handlers::edges::list_edges,
        handlers::edges::create_edge,
        handlers::edges::get_edge,
        handlers::edges::update_edge,
        handlers::edges::delete_edge,
        handlers::graph::find_path,
        handlers::graph::traverse,
    ),
    components(schemas(
        kgraph_core::NodeResponse,
        kgraph_core::EdgeResponse,
        kgraph_core::TraverseResult,
        kgraph_core::RelationshipType,
        kgraph_core::NodeId,
        kgraph_core::EdgeId,
        types::ErrorResponse,
        types::CreateNodeRequest,
        types::UpdateNodeRequest,
        types::CreateEdgeRequest,
        types::UpdateEdgeRequest,
        types::TraverseRequest,
        types::PathResponse,
        types::DegreeResponse,
        types::HealthResponse,
        types::IndexResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "nodes", description = "Concept CRUD"),
        (name = "edges", description = "Relationship CRUD"),
        (name = "graph", description = "Path and neighborhood queries")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// Parses configured CORS origins, logging and skipping any that are not
/// valid header values.
pub fn parse_cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|raw| match raw.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %raw, error = %e, "CORS: ignoring invalid origin");
                None
            }
        })
        .collect()
}

/// Builds the API router. Transport layers (CORS, tracing) are added by the
/// binary.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/nodes", get(list_nodes).post(create_node))
        .route(
            "/nodes/{id}",
            get(get_node).put(update_node).delete(delete_node),
        )
        .route("/nodes/{id}/degree", get(get_node_degree))
        .route("/edges", get(list_edges).post(create_edge))
        .route(
            "/edges/{id}",
            get(get_edge).put(update_edge).delete(delete_edge),
        )
        .route("/graph/path", get(find_path))
        .route("/graph/traverse", post(traverse))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}
