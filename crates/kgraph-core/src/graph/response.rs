//! Externally shaped node/edge representations.
//!
//! Timestamps are rendered as ISO-8601 UTC strings with millisecond precision
//! (`2024-05-01T12:00:00.000Z`), field names are camelCase.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::types::{EdgeId, EdgeRecord, NodeId, NodeRecord, RelationshipType};

/// Formats a timestamp the way every response carries it.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A node as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NodeResponse {
    /// Node ID.
    pub id: NodeId,
    /// Concept title.
    pub title: String,
    /// Concept summary.
    pub summary: String,
    /// Tags in insertion order.
    pub tags: Vec<String>,
    /// Creation time (ISO-8601).
    pub created_at: String,
    /// Last update time (ISO-8601).
    pub updated_at: String,
}

impl From<&NodeRecord> for NodeResponse {
    fn from(node: &NodeRecord) -> Self {
        Self {
            id: node.id,
            title: node.title.clone(),
            summary: node.summary.clone(),
            tags: node.tags.clone(),
            created_at: format_timestamp(node.created_at),
            updated_at: format_timestamp(node.updated_at),
        }
    }
}

/// An edge as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EdgeResponse {
    /// Edge ID.
    pub id: EdgeId,
    /// Relationship type.
    #[serde(rename = "type")]
    pub relationship: RelationshipType,
    /// Optional description, omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Source node ID.
    pub source_id: NodeId,
    /// Target node ID.
    pub target_id: NodeId,
    /// Creation time (ISO-8601).
    pub created_at: String,
}

impl From<&EdgeRecord> for EdgeResponse {
    fn from(edge: &EdgeRecord) -> Self {
        Self {
            id: edge.id,
            relationship: edge.relationship,
            description: edge.description.clone(),
            source_id: edge.source_id,
            target_id: edge.target_id,
            created_at: format_timestamp(edge.created_at),
        }
    }
}

/// Result of a bounded traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TraverseResult {
    /// Node the expansion started from.
    pub start_id: NodeId,
    /// Hop bound used.
    pub depth: usize,
    /// Reached nodes in discovery order.
    pub nodes: Vec<NodeResponse>,
    /// Followed edges in discovery order.
    pub edges: Vec<EdgeResponse>,
}

/// Node and edge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GraphStats {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
}
