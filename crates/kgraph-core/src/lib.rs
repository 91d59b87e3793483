//! # `kgraph` Core
//!
//! In-memory knowledge graph engine: concepts (nodes) connected by typed,
//! directed relationships (edges), with shortest-path and bounded-depth
//! neighborhood queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use kgraph_core::graph::{GraphService, NewEdge, NewNode, RelationshipType};
//!
//! fn main() -> Result<(), kgraph_core::Error> {
//!     let service = GraphService::default();
//!
//!     let a = service.create_node(NewNode::new("A", "Start"));
//!     let b = service.create_node(NewNode::new("B", "Middle"));
//!     let c = service.create_node(NewNode::new("C", "End"));
//!     service.create_edge(NewEdge::new(RelationshipType::RelatesTo, a.id, b.id))?;
//!     service.create_edge(NewEdge::new(RelationshipType::Supports, b.id, c.id))?;
//!
//!     // Shortest directed path
//!     let path = service.find_path(a.id, c.id)?;
//!     assert_eq!(path.len(), 3);
//!
//!     // Everything within two hops
//!     let around = service.traverse(a.id, 2)?;
//!     assert_eq!(around.nodes.len(), 3);
//!     assert_eq!(around.edges.len(), 2);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;
pub mod seed;

pub use config::{ConfigError, KgConfig, LoggingConfig, ServerConfig, TraversalLimits};
pub use error::{Error, ErrorKind, Result};
pub use graph::{
    EdgeId, EdgeResponse, GraphService, GraphStats, GraphStore, NodeId, NodeResponse,
    RelationshipType, TraverseResult,
};
pub use seed::{load_demo_graph, DemoGraph};
