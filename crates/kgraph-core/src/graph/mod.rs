//! In-memory knowledge graph.
//!
//! Provides record types, the [`GraphStore`] that owns them, breadth-first
//! traversal algorithms, and the [`GraphService`] that callers go through.
//!
//! # Example
//!
//! ```rust
//! use kgraph_core::graph::{GraphService, NewEdge, NewNode, RelationshipType};
//!
//! let service = GraphService::default();
//! let a = service.create_node(NewNode::new("Knowledge Graphs", "Entities and relationships"));
//! let b = service.create_node(NewNode::new("Semantic Search", "Meaning-aware retrieval"));
//! service
//!     .create_edge(NewEdge::new(RelationshipType::DerivesFrom, b.id, a.id))
//!     .unwrap();
//!
//! let result = service.traverse(b.id, 1).unwrap();
//! assert_eq!(result.nodes.len(), 2);
//! assert_eq!(result.edges.len(), 1);
//! ```

mod response;
mod service;
mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod service_tests;

pub use response::{format_timestamp, EdgeResponse, GraphStats, NodeResponse, TraverseResult};
pub use service::GraphService;
pub use store::GraphStore;
pub use traversal::{GraphTraversal, Neighborhood};
pub use types::{
    EdgeId, EdgePatch, EdgeRecord, NewEdge, NewNode, NodeId, NodePatch, NodeRecord,
    RelationshipType,
};
