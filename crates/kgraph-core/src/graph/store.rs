//! In-memory graph store with adjacency indexing.
//!
//! Nodes and edges live in insertion-ordered maps keyed by their ids, so
//! listings and outgoing-edge lookups are stable across calls. The store keeps
//! structural integrity only (unique ids, cascading delete); domain rules such
//! as rejecting self-loops belong to [`GraphService`](super::GraphService).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::HashMap;

use super::types::{
    EdgeId, EdgePatch, EdgeRecord, NewEdge, NewNode, NodeId, NodePatch, NodeRecord,
};

/// In-memory storage for graph nodes and edges with bidirectional indexing.
///
/// Provides O(1) access to nodes/edges by ID and O(degree) access to
/// outgoing/incoming edges for any node.
#[derive(Debug, Default)]
pub struct GraphStore {
    /// All nodes indexed by ID, in creation order.
    nodes: IndexMap<NodeId, NodeRecord>,
    /// All edges indexed by ID, in creation order.
    edges: IndexMap<EdgeId, EdgeRecord>,
    /// Outgoing edges: source_id -> edge ids in creation order.
    outgoing: HashMap<NodeId, Vec<EdgeId>>,
    /// Incoming edges: target_id -> edge ids in creation order.
    incoming: HashMap<NodeId, Vec<EdgeId>>,
}

impl GraphStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize, expected_edges: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(expected_nodes),
            edges: IndexMap::with_capacity(expected_edges),
            outgoing: HashMap::with_capacity(expected_nodes),
            incoming: HashMap::with_capacity(expected_nodes),
        }
    }

    // ── Node CRUD ──────────────────────────────────────────────────────

    /// Returns all nodes in creation order.
    #[must_use]
    pub fn list_nodes(&self) -> Vec<&NodeRecord> {
        self.nodes.values().collect()
    }

    /// Gets a node by ID.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    /// Stores a new node under a fresh id.
    pub fn create_node(&mut self, input: NewNode) -> &NodeRecord {
        let id = self.fresh_node_id();
        let now = Utc::now();
        let record = NodeRecord {
            id,
            title: input.title,
            summary: input.summary,
            tags: input.tags,
            created_at: now,
            updated_at: now,
        };
        self.nodes.entry(id).or_insert(record)
    }

    /// Merges `patch` over an existing node and refreshes `updated_at`.
    ///
    /// Returns `None` if the node does not exist.
    pub fn update_node(&mut self, id: NodeId, patch: NodePatch) -> Option<&NodeRecord> {
        let node = self.nodes.get_mut(&id)?;
        if let Some(title) = patch.title {
            node.title = title;
        }
        if let Some(summary) = patch.summary {
            node.summary = summary;
        }
        if let Some(tags) = patch.tags {
            node.tags = tags;
        }
        node.updated_at = monotonic_now(node.updated_at);
        Some(&*node)
    }

    /// Removes a node and all its connected edges (cascade delete).
    ///
    /// Returns whether a node was removed.
    pub fn delete_node(&mut self, id: NodeId) -> bool {
        if self.nodes.shift_remove(&id).is_none() {
            return false;
        }
        self.remove_node_edges(id);
        true
    }

    /// Returns true if a node with the given ID exists.
    #[must_use]
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Returns all edges in creation order.
    #[must_use]
    pub fn list_edges(&self) -> Vec<&EdgeRecord> {
        self.edges.values().collect()
    }

    /// Gets an edge by its ID.
    #[must_use]
    pub fn get_edge(&self, id: EdgeId) -> Option<&EdgeRecord> {
        self.edges.get(&id)
    }

    /// Stores a new edge under a fresh id and indexes both endpoints.
    ///
    /// Endpoints are not validated here.
    pub fn create_edge(&mut self, input: NewEdge) -> &EdgeRecord {
        let id = self.fresh_edge_id();
        let record = EdgeRecord {
            id,
            relationship: input.relationship,
            description: input.description,
            source_id: input.source_id,
            target_id: input.target_id,
            created_at: Utc::now(),
        };

        self.outgoing.entry(record.source_id).or_default().push(id);
        self.incoming.entry(record.target_id).or_default().push(id);
        self.edges.entry(id).or_insert(record)
    }

    /// Merges `patch` over an existing edge.
    ///
    /// Returns `None` if the edge does not exist.
    pub fn update_edge(&mut self, id: EdgeId, patch: EdgePatch) -> Option<&EdgeRecord> {
        let edge = self.edges.get_mut(&id)?;
        if let Some(relationship) = patch.relationship {
            edge.relationship = relationship;
        }
        if let Some(description) = patch.description {
            edge.description = description;
        }
        Some(&*edge)
    }

    /// Removes an edge by ID, cleaning up both adjacency lists.
    ///
    /// Returns whether an edge was removed.
    pub fn delete_edge(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.shift_remove(&id) else {
            return false;
        };
        if let Some(ids) = self.outgoing.get_mut(&edge.source_id) {
            ids.retain(|&e| e != id);
        }
        if let Some(ids) = self.incoming.get_mut(&edge.target_id) {
            ids.retain(|&e| e != id);
        }
        true
    }

    /// Checks if an edge with the given ID exists.
    #[must_use]
    pub fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Gets all outgoing edges from a node, in edge-creation order.
    #[must_use]
    pub fn edges_from(&self, source_id: NodeId) -> Vec<&EdgeRecord> {
        self.outgoing
            .get(&source_id)
            .map(|ids| ids.iter().filter_map(|id| self.edges.get(id)).collect())
            .unwrap_or_default()
    }

    /// Returns the out-degree of a node.
    #[must_use]
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.outgoing.get(&id).map_or(0, Vec::len)
    }

    /// Returns the in-degree of a node.
    #[must_use]
    pub fn in_degree(&self, id: NodeId) -> usize {
        self.incoming.get(&id).map_or(0, Vec::len)
    }

    /// Removes all edges connected to a node (cascade delete).
    fn remove_node_edges(&mut self, node_id: NodeId) {
        let outgoing_ids = self.outgoing.remove(&node_id).unwrap_or_default();
        let incoming_ids = self.incoming.remove(&node_id).unwrap_or_default();

        for edge_id in outgoing_ids {
            if let Some(edge) = self.edges.shift_remove(&edge_id) {
                if let Some(ids) = self.incoming.get_mut(&edge.target_id) {
                    ids.retain(|&id| id != edge_id);
                }
            }
        }

        for edge_id in incoming_ids {
            if let Some(edge) = self.edges.shift_remove(&edge_id) {
                if let Some(ids) = self.outgoing.get_mut(&edge.source_id) {
                    ids.retain(|&id| id != edge_id);
                }
            }
        }
    }

    fn fresh_node_id(&self) -> NodeId {
        loop {
            let id = NodeId::new_v4();
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }

    fn fresh_edge_id(&self) -> EdgeId {
        loop {
            let id = EdgeId::new_v4();
            if !self.edges.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Current time, clamped so an update never moves a timestamp backwards.
fn monotonic_now(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
