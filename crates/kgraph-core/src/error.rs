//! Error types for kgraph-core.

use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// Broad classification of a graph error, used by callers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced node or edge does not exist.
    NotFound,
    /// The request is well-formed but forbidden by a domain rule.
    Conflict,
}

/// Errors raised by the graph service.
///
/// Store accessors never fail; absence is reported as `Option`/`bool` and
/// turned into one of these variants by the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Node lookup by id failed.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Edge lookup by id failed.
    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// One endpoint of a path or relationship does not resolve.
    #[error("Source or target node not found")]
    EndpointNotFound {
        /// Requested source node.
        source_id: NodeId,
        /// Requested target node.
        target_id: NodeId,
    },

    /// Traversal start node does not resolve.
    #[error("Start node not found: {0}")]
    StartNotFound(NodeId),

    /// Relationship from a node to itself.
    #[error("Cannot create a relationship between the same node")]
    SelfLoop(NodeId),
}

impl Error {
    /// Returns the broad kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeNotFound(_)
            | Self::EdgeNotFound(_)
            | Self::EndpointNotFound { .. }
            | Self::StartNotFound(_) => ErrorKind::NotFound,
            Self::SelfLoop(_) => ErrorKind::Conflict,
        }
    }

    /// Returns true for the not-found family of errors.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
