//! Request and response bodies for the REST API.
//!
//! Requests are deserialized leniently (every field optional) and then
//! validated into core inputs, so missing fields produce a 400 with field
//! details instead of a bare deserialization error.

use kgraph_core::graph::{EdgePatch, NewEdge, NewNode, NodePatch};
use kgraph_core::{NodeId, NodeResponse, RelationshipType, TraversalLimits};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

/// Maximum length of an edge description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub message: String,
    /// Per-field validation messages, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Records a failure for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the messages recorded for `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    /// Renders the failures as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "fieldErrors": self.fields })
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Builds an error with a single failure.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn require_text(errors: &mut ValidationErrors, field: &str, value: Option<String>) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        Some(_) => {
            errors.add(field, format!("{field} cannot be empty"));
            String::new()
        }
        None => {
            errors.add(field, format!("{field} is required"));
            String::new()
        }
    }
}

fn non_empty_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(text) if text.is_empty() => {
            errors.add(field, format!("{field} cannot be empty"));
            None
        }
        other => other,
    }
}

fn clean_tags(errors: &mut ValidationErrors, tags: Vec<String>) -> Vec<String> {
    let mut cleaned = Vec::with_capacity(tags.len());
    for (i, tag) in tags.into_iter().enumerate() {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            errors.add("tags", format!("tag at index {i} cannot be empty"));
        } else {
            cleaned.push(trimmed.to_string());
        }
    }
    cleaned
}

fn clean_description(errors: &mut ValidationErrors, text: &str) -> String {
    let trimmed = text.trim().to_string();
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        errors.add(
            "description",
            format!("description cannot exceed {MAX_DESCRIPTION_LEN} characters"),
        );
    }
    trimmed
}

fn parse_uuid_field(errors: &mut ValidationErrors, field: &str, value: Option<String>) -> NodeId {
    match value.as_deref().map(str::parse::<NodeId>) {
        Some(Ok(id)) => id,
        Some(Err(_)) => {
            errors.add(field, format!("{field} must be a valid UUID"));
            NodeId::from_uuid(uuid::Uuid::nil())
        }
        None => {
            errors.add(field, format!("{field} is required"));
            NodeId::from_uuid(uuid::Uuid::nil())
        }
    }
}

fn parse_relationship(
    errors: &mut ValidationErrors,
    value: Option<String>,
) -> Option<RelationshipType> {
    let raw = value?;
    match raw.parse::<RelationshipType>() {
        Ok(ty) => Some(ty),
        Err(message) => {
            errors.add("type", message);
            None
        }
    }
}

/// Request to create a node.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateNodeRequest {
    /// Concept title (required, non-empty).
    pub title: Option<String>,
    /// Concept summary (required, non-empty).
    pub summary: Option<String>,
    /// Tags; each is trimmed and must be non-empty.
    pub tags: Option<Vec<String>>,
}

impl CreateNodeRequest {
    /// Validates the request into a core input.
    pub fn validate(self) -> Result<NewNode, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = require_text(&mut errors, "title", self.title);
        let summary = require_text(&mut errors, "summary", self.summary);
        let tags = clean_tags(&mut errors, self.tags.unwrap_or_default());
        errors.into_result(NewNode::new(title, summary).with_tags(tags))
    }
}

/// Request to update a node. At least one field is required.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateNodeRequest {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement summary.
    pub summary: Option<String>,
    /// Replacement tags.
    pub tags: Option<Vec<String>>,
}

impl UpdateNodeRequest {
    /// Validates the request into a core patch.
    pub fn validate(self) -> Result<NodePatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let patch = NodePatch {
            title: non_empty_text(&mut errors, "title", self.title),
            summary: non_empty_text(&mut errors, "summary", self.summary),
            tags: self.tags.map(|tags| clean_tags(&mut errors, tags)),
        };
        if errors.is_empty() && patch.is_empty() {
            errors.add("body", "At least one field must be provided");
        }
        errors.into_result(patch)
    }
}

/// Request to create an edge.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEdgeRequest {
    /// One of `relates_to`, `supports`, `contradicts`, `derives_from`.
    #[serde(rename = "type")]
    pub relationship: Option<String>,
    /// Optional description, trimmed, at most 500 characters.
    pub description: Option<String>,
    /// Source node UUID.
    pub source_id: Option<String>,
    /// Target node UUID.
    pub target_id: Option<String>,
}

impl CreateEdgeRequest {
    /// Validates the request into a core input.
    pub fn validate(self) -> Result<NewEdge, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.relationship.is_none() {
            errors.add("type", "type is required");
        }
        let relationship = parse_relationship(&mut errors, self.relationship);
        let source_id = parse_uuid_field(&mut errors, "sourceId", self.source_id);
        let target_id = parse_uuid_field(&mut errors, "targetId", self.target_id);
        let description = self
            .description
            .map(|text| clean_description(&mut errors, &text));

        match relationship {
            Some(relationship) if errors.is_empty() => Ok(NewEdge {
                relationship,
                source_id,
                target_id,
                description,
            }),
            _ => Err(errors),
        }
    }
}

/// Request to update an edge. At least one field is required; a JSON `null`
/// description clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEdgeRequest {
    /// Replacement relationship type.
    #[serde(rename = "type")]
    pub relationship: Option<String>,
    /// Replacement description, or `null` to clear.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl UpdateEdgeRequest {
    /// Validates the request into a core patch.
    pub fn validate(self) -> Result<EdgePatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let patch = EdgePatch {
            relationship: parse_relationship(&mut errors, self.relationship),
            description: self
                .description
                .map(|inner| inner.map(|text| clean_description(&mut errors, &text))),
        };
        if errors.is_empty() && patch.is_empty() {
            errors.add("body", "At least one field must be provided");
        }
        errors.into_result(patch)
    }
}

/// Query parameters for `GET /graph/path`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PathQuery {
    /// Source node UUID.
    pub source_id: Option<String>,
    /// Target node UUID.
    pub target_id: Option<String>,
}

impl PathQuery {
    /// Validates both endpoints.
    pub fn validate(self) -> Result<(NodeId, NodeId), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let source = parse_uuid_field(&mut errors, "sourceId", self.source_id);
        let target = parse_uuid_field(&mut errors, "targetId", self.target_id);
        errors.into_result((source, target))
    }
}

/// Response of `GET /graph/path`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PathResponse {
    /// Nodes along the path, source first; empty when unreachable.
    pub path: Vec<NodeResponse>,
}

/// Response of `GET /nodes/{id}/degree`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DegreeResponse {
    /// Number of incoming edges.
    pub in_degree: usize,
    /// Number of outgoing edges.
    pub out_degree: usize,
}

/// Request body of `POST /graph/traverse`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TraverseRequest {
    /// Start node UUID.
    pub start_id: Option<String>,
    /// Hop bound, an integer within the configured limits.
    pub depth: Option<i64>,
}

impl TraverseRequest {
    /// Validates the start id and checks `depth` against `limits`.
    pub fn validate(self, limits: TraversalLimits) -> Result<(NodeId, usize), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let start = parse_uuid_field(&mut errors, "startId", self.start_id);
        let depth = match self.depth {
            None => {
                errors.add("depth", "depth is required");
                0
            }
            Some(raw) => match usize::try_from(raw) {
                Ok(depth) if limits.accepts(depth) => depth,
                _ => {
                    errors.add(
                        "depth",
                        format!(
                            "depth must be an integer between {} and {}",
                            limits.min_depth, limits.max_depth
                        ),
                    );
                    0
                }
            },
        };
        errors.into_result((start, depth))
    }
}

/// Response of `GET /health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service name.
    pub service: String,
    /// Always `ok`.
    pub status: String,
    /// Server time (ISO-8601).
    pub timestamp: String,
    /// Deployment environment.
    pub environment: String,
    /// Number of nodes currently stored.
    pub nodes: usize,
    /// Number of edges currently stored.
    pub edges: usize,
}

/// Response of `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndexResponse {
    /// Service name.
    pub name: String,
    /// Readiness message.
    pub message: String,
    /// Top-level resource paths.
    pub docs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node_collects_every_failure() {
        let errors = CreateNodeRequest::default().validate().unwrap_err();
        assert_eq!(errors.field("title"), ["title is required".to_string()]);
        assert_eq!(errors.field("summary"), ["summary is required".to_string()]);
    }

    #[test]
    fn test_create_node_trims_tags() {
        let input = CreateNodeRequest {
            title: Some("T".into()),
            summary: Some("S".into()),
            tags: Some(vec![" a ".into(), "b".into()]),
        }
        .validate()
        .unwrap();
        assert_eq!(input.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_update_edge_distinguishes_null_from_absent() {
        let absent: UpdateEdgeRequest = serde_json::from_str(r#"{"type":"supports"}"#).unwrap();
        assert_eq!(absent.description, None);

        let null: UpdateEdgeRequest = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(null.description, Some(None));
        let patch = null.validate().unwrap();
        assert_eq!(patch.description, Some(None));
    }

    #[test]
    fn test_description_length_limit_counts_characters() {
        let request = CreateEdgeRequest {
            relationship: Some("supports".into()),
            description: Some("é".repeat(MAX_DESCRIPTION_LEN)),
            source_id: Some(NodeId::new_v4().to_string()),
            target_id: Some(NodeId::new_v4().to_string()),
        };
        assert!(request.validate().is_ok());

        let request = CreateEdgeRequest {
            relationship: Some("supports".into()),
            description: Some("x".repeat(MAX_DESCRIPTION_LEN + 1)),
            source_id: Some(NodeId::new_v4().to_string()),
            target_id: Some(NodeId::new_v4().to_string()),
        };
        assert!(!request.validate().unwrap_err().field("description").is_empty());
    }

    #[test]
    fn test_traverse_depth_bounds() {
        let limits = TraversalLimits::default();
        let start = NodeId::new_v4().to_string();
        for (depth, ok) in [(0, false), (1, true), (5, true), (6, false), (-3, false)] {
            let request = TraverseRequest {
                start_id: Some(start.clone()),
                depth: Some(depth),
            };
            assert_eq!(request.validate(limits).is_ok(), ok, "depth {depth}");
        }
    }

    #[test]
    fn test_error_response_omits_absent_details() {
        let body = ErrorResponse {
            message: "Node not found".into(),
            details: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_error_response_carries_message_key() {
        let body = ErrorResponse {
            message: "Validation failed".into(),
            details: Some(serde_json::json!({ "fieldErrors": {} })),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Validation failed");
        assert!(json.get("error").is_none());
        assert!(json["details"].is_object());
    }
}
