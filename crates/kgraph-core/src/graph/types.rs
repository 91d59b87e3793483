//! Graph record types for the in-memory knowledge graph.
//!
//! Records are owned by [`GraphStore`](super::GraphStore); callers build them
//! through the `New*` inputs and change them through the `*Patch` inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a node (concept).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Opaque identifier of an edge (relationship).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct EdgeId(Uuid);

impl EdgeId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EdgeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// The closed set of relationship types an edge may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Generic association.
    RelatesTo,
    /// Source lends support to target.
    Supports,
    /// Source contradicts target.
    Contradicts,
    /// Source is derived from target.
    DerivesFrom,
}

impl RelationshipType {
    /// All relationship types, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::RelatesTo,
        Self::Supports,
        Self::Contradicts,
        Self::DerivesFrom,
    ];

    /// Returns the wire name of this relationship type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RelatesTo => "relates_to",
            Self::Supports => "supports",
            Self::Contradicts => "contradicts",
            Self::DerivesFrom => "derives_from",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid relationship type '{s}'. Valid: relates_to, supports, contradicts, derives_from"
                )
            })
    }
}

/// A concept stored in the knowledge graph.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub(crate) id: NodeId,
    pub(crate) title: String,
    pub(crate) summary: String,
    pub(crate) tags: Vec<String>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl NodeRecord {
    /// Returns the node ID.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the node summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// A typed directed relationship between two nodes.
///
/// Endpoints are fixed at creation; only the type and description change.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub(crate) id: EdgeId,
    pub(crate) relationship: RelationshipType,
    pub(crate) description: Option<String>,
    pub(crate) source_id: NodeId,
    pub(crate) target_id: NodeId,
    pub(crate) created_at: DateTime<Utc>,
}

impl EdgeRecord {
    /// Returns the edge ID.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the relationship type.
    #[must_use]
    pub fn relationship(&self) -> RelationshipType {
        self.relationship
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the source node ID.
    #[must_use]
    pub fn source_id(&self) -> NodeId {
        self.source_id
    }

    /// Returns the target node ID.
    #[must_use]
    pub fn target_id(&self) -> NodeId {
        self.target_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Input for creating a node.
///
/// # Example
///
/// ```rust
/// use kgraph_core::graph::NewNode;
///
/// let input = NewNode::new("GraphQL", "A query language").with_tags(vec!["api".into()]);
/// assert_eq!(input.tags, vec!["api".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewNode {
    /// Concept title.
    pub title: String,
    /// Concept summary.
    pub summary: String,
    /// Tags; empty when omitted.
    pub tags: Vec<String>,
}

impl NewNode {
    /// Creates a node input without tags.
    #[must_use]
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            tags: Vec::new(),
        }
    }

    /// Sets the tags (builder pattern).
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Partial update of a node. `None` fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement summary.
    pub summary: Option<String>,
    /// Replacement tags (the whole sequence).
    pub tags: Option<Vec<String>>,
}

impl NodePatch {
    /// Sets the replacement title (builder pattern).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement summary (builder pattern).
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the replacement tags (builder pattern).
    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.summary.is_none() && self.tags.is_none()
    }
}

/// Input for creating an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEdge {
    /// Relationship type.
    pub relationship: RelationshipType,
    /// Source node.
    pub source_id: NodeId,
    /// Target node.
    pub target_id: NodeId,
    /// Optional description.
    pub description: Option<String>,
}

impl NewEdge {
    /// Creates an edge input without description.
    #[must_use]
    pub fn new(relationship: RelationshipType, source_id: NodeId, target_id: NodeId) -> Self {
        Self {
            relationship,
            source_id,
            target_id,
            description: None,
        }
    }

    /// Sets the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of an edge.
///
/// `description` distinguishes "leave unchanged" (`None`) from "clear"
/// (`Some(None)`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgePatch {
    /// Replacement relationship type.
    pub relationship: Option<RelationshipType>,
    /// Replacement or cleared description.
    pub description: Option<Option<String>>,
}

impl EdgePatch {
    /// Sets the replacement relationship type (builder pattern).
    #[must_use]
    pub fn relationship(mut self, relationship: RelationshipType) -> Self {
        self.relationship = Some(relationship);
        self
    }

    /// Sets the replacement description (builder pattern).
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description (builder pattern).
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relationship.is_none() && self.description.is_none()
    }
}
