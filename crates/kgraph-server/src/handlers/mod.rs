//! HTTP handlers for the kgraph REST API.
//!
//! This module organizes handlers by domain:
//! - `health`: service banner and health check
//! - `nodes`: node CRUD
//! - `edges`: edge CRUD
//! - `graph`: shortest path and neighborhood traversal

pub mod edges;
pub mod graph;
pub mod health;
pub mod helpers;
pub mod nodes;

pub use edges::{create_edge, delete_edge, get_edge, list_edges, update_edge};
pub use graph::{find_path, traverse};
pub use health::{health_check, index};
pub use nodes::{create_node, delete_node, get_node, get_node_degree, list_nodes, update_node};
