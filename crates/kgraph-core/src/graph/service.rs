//! Domain service over the graph store.
//!
//! [`GraphService`] is the only caller of [`GraphStore`]. It enforces the
//! rules the store does not (edge endpoints must exist, no self-loops), owns
//! the lock discipline, and shapes records into responses.

use parking_lot::RwLock;

use crate::error::{Error, Result};

use super::response::{EdgeResponse, GraphStats, NodeResponse, TraverseResult};
use super::store::GraphStore;
use super::traversal::{neighborhood, shortest_path};
use super::types::{EdgeId, EdgePatch, NewEdge, NewNode, NodeId, NodePatch};

/// Thread-safe knowledge graph service.
///
/// Mutations take the write lock, so a cascading delete and a concurrent edge
/// creation can never interleave. Reads and traversals share the read lock.
///
/// # Example
///
/// ```rust
/// use kgraph_core::graph::{GraphService, NewEdge, NewNode, RelationshipType};
///
/// let service = GraphService::default();
/// let a = service.create_node(NewNode::new("A", "Start"));
/// let b = service.create_node(NewNode::new("B", "End"));
/// service
///     .create_edge(NewEdge::new(RelationshipType::Supports, a.id, b.id))
///     .unwrap();
///
/// let path = service.find_path(a.id, b.id).unwrap();
/// assert_eq!(path.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GraphService {
    store: RwLock<GraphStore>,
}

impl GraphService {
    /// Creates a service that owns `store`.
    #[must_use]
    pub fn new(store: GraphStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Lists all nodes in creation order.
    #[must_use]
    pub fn list_nodes(&self) -> Vec<NodeResponse> {
        let store = self.store.read();
        store.list_nodes().into_iter().map(NodeResponse::from).collect()
    }

    /// Gets a node by ID.
    pub fn get_node(&self, id: NodeId) -> Result<NodeResponse> {
        let store = self.store.read();
        store
            .get_node(id)
            .map(NodeResponse::from)
            .ok_or(Error::NodeNotFound(id))
    }

    /// Creates a node.
    pub fn create_node(&self, input: NewNode) -> NodeResponse {
        let mut store = self.store.write();
        let node = NodeResponse::from(store.create_node(input));
        tracing::debug!(node_id = %node.id, "Node created");
        node
    }

    /// Applies a partial update to a node.
    pub fn update_node(&self, id: NodeId, patch: NodePatch) -> Result<NodeResponse> {
        let mut store = self.store.write();
        let node = store
            .update_node(id, patch)
            .map(NodeResponse::from)
            .ok_or(Error::NodeNotFound(id))?;
        tracing::debug!(node_id = %id, "Node updated");
        Ok(node)
    }

    /// Deletes a node together with every edge touching it.
    pub fn delete_node(&self, id: NodeId) -> Result<()> {
        let mut store = self.store.write();
        let edges_before = store.edge_count();
        if !store.delete_node(id) {
            return Err(Error::NodeNotFound(id));
        }
        tracing::debug!(
            node_id = %id,
            cascaded_edges = edges_before - store.edge_count(),
            "Node deleted"
        );
        Ok(())
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Lists all edges in creation order.
    #[must_use]
    pub fn list_edges(&self) -> Vec<EdgeResponse> {
        let store = self.store.read();
        store.list_edges().into_iter().map(EdgeResponse::from).collect()
    }

    /// Gets an edge by ID.
    pub fn get_edge(&self, id: EdgeId) -> Result<EdgeResponse> {
        let store = self.store.read();
        store
            .get_edge(id)
            .map(EdgeResponse::from)
            .ok_or(Error::EdgeNotFound(id))
    }

    /// Creates an edge between two existing, distinct nodes.
    ///
    /// # Errors
    ///
    /// - `Error::EndpointNotFound` if either endpoint does not exist
    /// - `Error::SelfLoop` if source and target are the same node
    pub fn create_edge(&self, input: NewEdge) -> Result<EdgeResponse> {
        let mut store = self.store.write();
        if !store.has_node(input.source_id) || !store.has_node(input.target_id) {
            return Err(Error::EndpointNotFound {
                source_id: input.source_id,
                target_id: input.target_id,
            });
        }
        if input.source_id == input.target_id {
            return Err(Error::SelfLoop(input.source_id));
        }

        let edge = EdgeResponse::from(store.create_edge(input));
        tracing::debug!(
            edge_id = %edge.id,
            source = %edge.source_id,
            target = %edge.target_id,
            relationship = %edge.relationship,
            "Edge created"
        );
        Ok(edge)
    }

    /// Applies a partial update to an edge.
    pub fn update_edge(&self, id: EdgeId, patch: EdgePatch) -> Result<EdgeResponse> {
        let mut store = self.store.write();
        let edge = store
            .update_edge(id, patch)
            .map(EdgeResponse::from)
            .ok_or(Error::EdgeNotFound(id))?;
        tracing::debug!(edge_id = %id, "Edge updated");
        Ok(edge)
    }

    /// Deletes an edge.
    pub fn delete_edge(&self, id: EdgeId) -> Result<()> {
        let mut store = self.store.write();
        if !store.delete_edge(id) {
            return Err(Error::EdgeNotFound(id));
        }
        tracing::debug!(edge_id = %id, "Edge deleted");
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Finds a shortest directed path from `source_id` to `target_id`.
    ///
    /// Returns the nodes along the path, source first. An unreachable target
    /// yields an empty vector rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::EndpointNotFound` if either node does not exist.
    pub fn find_path(&self, source_id: NodeId, target_id: NodeId) -> Result<Vec<NodeResponse>> {
        let store = self.store.read();
        if !store.has_node(source_id) || !store.has_node(target_id) {
            return Err(Error::EndpointNotFound {
                source_id,
                target_id,
            });
        }

        let path = shortest_path(&*store, source_id, target_id);
        tracing::debug!(
            source = %source_id,
            target = %target_id,
            hops = path.len().saturating_sub(1),
            found = !path.is_empty(),
            "Path search finished"
        );
        Ok(path
            .into_iter()
            .filter_map(|id| store.get_node(id))
            .map(NodeResponse::from)
            .collect())
    }

    /// Collects the nodes and edges within `depth` hops of `start_id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::StartNotFound` if the start node does not exist.
    pub fn traverse(&self, start_id: NodeId, depth: usize) -> Result<TraverseResult> {
        let store = self.store.read();
        if !store.has_node(start_id) {
            return Err(Error::StartNotFound(start_id));
        }

        let found = neighborhood(&*store, start_id, depth);
        tracing::debug!(
            start = %start_id,
            depth,
            nodes = found.nodes.len(),
            edges = found.edges.len(),
            "Traversal finished"
        );
        Ok(TraverseResult {
            start_id,
            depth,
            nodes: found
                .nodes
                .into_iter()
                .filter_map(|id| store.get_node(id))
                .map(NodeResponse::from)
                .collect(),
            edges: found
                .edges
                .into_iter()
                .filter_map(|id| store.get_edge(id))
                .map(EdgeResponse::from)
                .collect(),
        })
    }

    /// Returns `(in_degree, out_degree)` of a node.
    pub fn node_degree(&self, id: NodeId) -> Result<(usize, usize)> {
        let store = self.store.read();
        if !store.has_node(id) {
            return Err(Error::NodeNotFound(id));
        }
        Ok((store.in_degree(id), store.out_degree(id)))
    }

    /// Returns node and edge counts.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let store = self.store.read();
        GraphStats {
            nodes: store.node_count(),
            edges: store.edge_count(),
        }
    }
}
