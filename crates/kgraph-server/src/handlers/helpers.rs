//! Shared handler helpers for the kgraph REST API.
//!
//! Every handler returns `Result<_, ApiError>`, so status mapping and error
//! bodies stay consistent across routes.

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use kgraph_core::{EdgeId, ErrorKind, NodeId};

use crate::types::{ErrorResponse, ValidationErrors};

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Message carried by every 400 response.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Maps a domain error onto 404 or 409.
pub fn domain_error(err: &kgraph_core::Error) -> ApiError {
    let status = match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
    };
    (
        status,
        Json(ErrorResponse {
            message: err.to_string(),
            details: None,
        }),
    )
}

/// Builds a 400 response carrying per-field details.
pub fn validation_error(errors: &ValidationErrors) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message: VALIDATION_FAILED.to_string(),
            details: Some(errors.to_json()),
        }),
    )
}

/// Build an internal server error response without leaking implementation details.
///
/// Logs the full error via `tracing::error!` and returns a generic message.
pub fn internal_error(context: &str, err: &dyn std::fmt::Display) -> ApiError {
    tracing::error!(%context, error = %err, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: format!("{context}: internal error"),
            details: None,
        }),
    )
}

/// Unwraps a JSON body, turning extractor rejections into a 400.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            Err(validation_error(&ValidationErrors::single(
                "body",
                rejection.body_text(),
            )))
        }
    }
}

/// Parses a node id path segment.
pub fn parse_node_id(raw: &str) -> Result<NodeId, ApiError> {
    raw.parse()
        .map_err(|_| validation_error(&ValidationErrors::single("id", "id must be a valid UUID")))
}

/// Parses an edge id path segment.
pub fn parse_edge_id(raw: &str) -> Result<EdgeId, ApiError> {
    raw.parse()
        .map_err(|_| validation_error(&ValidationErrors::single("id", "id must be a valid UUID")))
}

/// Runs a graph operation on the blocking pool.
pub async fn run_blocking<T, F>(context: &str, op: F) -> Result<T, ApiError>
where
    F: FnOnce() -> kgraph_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| internal_error(context, &e))?
        .map_err(|e| domain_error(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_does_not_leak_details() {
        let detail = "JoinError: task panicked with sensitive data";
        let (status, Json(body)) = internal_error("Traverse", &detail);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.message.contains("internal error"));
        assert!(!body.message.contains("panicked"));
        assert!(!body.message.contains("sensitive"));
    }

    #[test]
    fn test_domain_error_status_mapping() {
        let id = NodeId::new_v4();
        let (status, Json(body)) = domain_error(&kgraph_core::Error::NodeNotFound(id));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.message.contains(&id.to_string()));

        let (status, _) = domain_error(&kgraph_core::Error::SelfLoop(id));
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_parse_ids() {
        let id = NodeId::new_v4();
        assert_eq!(parse_node_id(&id.to_string()).unwrap(), id);

        let (status, Json(body)) = parse_edge_id("not-a-uuid").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, VALIDATION_FAILED);
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn test_run_blocking_maps_domain_errors() {
        let id = NodeId::new_v4();
        let result: Result<(), ApiError> =
            run_blocking("Test", move || Err(kgraph_core::Error::StartNotFound(id))).await;
        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
