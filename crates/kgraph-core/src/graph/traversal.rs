//! Breadth-first traversal over outgoing edges.
//!
//! A single queue-based primitive, [`breadth_first`], drives both read
//! algorithms: [`shortest_path`] stops on the first dequeue of its target,
//! [`neighborhood`] prunes expansion at a fixed hop count. Both follow
//! outgoing edges in edge-creation order, which makes their results
//! deterministic.

use indexmap::IndexSet;
use std::collections::{HashMap, HashSet, VecDeque};

use super::types::{EdgeId, NodeId};

/// Outgoing adjacency, as seen by the traversal algorithms.
///
/// Returns outgoing edges as `(edge_id, target_node_id)` pairs, in a stable
/// order.
pub trait GraphTraversal {
    /// Returns outgoing edges from a node as `(edge_id, target)`.
    fn outgoing_edges(&self, node_id: NodeId) -> Vec<(EdgeId, NodeId)>;
}

impl GraphTraversal for super::GraphStore {
    fn outgoing_edges(&self, node_id: NodeId) -> Vec<(EdgeId, NodeId)> {
        self.edges_from(node_id)
            .into_iter()
            .map(|e| (e.id(), e.target_id()))
            .collect()
    }
}

/// What to do after visiting a dequeued node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Follow the node's outgoing edges.
    Expand,
    /// Keep the node but do not follow its edges.
    Prune,
    /// End the traversal immediately.
    Stop,
}

/// Callbacks invoked by [`breadth_first`].
pub trait BfsVisitor {
    /// Called once per node, on its first dequeue, with its hop distance.
    fn visit_node(&mut self, node_id: NodeId, depth: usize) -> Visit;

    /// Called for every edge leaving an expanded node, including edges into
    /// nodes that were already visited. `depth` is the source's distance.
    fn visit_edge(&mut self, _edge_id: EdgeId, _target: NodeId, _depth: usize) {}
}

/// Parent links recorded while traversing, keyed by child.
///
/// A node's parent is the node whose expansion first enqueued it, which is
/// also the state that gets dequeued first.
#[derive(Debug, Default)]
pub struct BfsTree {
    root: Option<NodeId>,
    parents: HashMap<NodeId, NodeId>,
}

impl BfsTree {
    /// Rebuilds the path from the traversal root to `node`, root first.
    ///
    /// Returns an empty path if `node` was never reached.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Vec<NodeId> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        let mut path = vec![node];
        let mut current = node;
        while current != root {
            match self.parents.get(&current) {
                Some(&parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}

/// Breadth-first traversal from `start` over outgoing edges.
///
/// Nodes are marked visited when dequeued; a repeated dequeue of the same
/// node is skipped and edges into visited nodes are reported to the visitor
/// but not enqueued. This terminates on cyclic graphs.
pub fn breadth_first<G, V>(graph: &G, start: NodeId, visitor: &mut V) -> BfsTree
where
    G: GraphTraversal + ?Sized,
    V: BfsVisitor + ?Sized,
{
    let mut tree = BfsTree {
        root: Some(start),
        parents: HashMap::new(),
    };
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back((start, 0usize));

    while let Some((current, depth)) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }

        match visitor.visit_node(current, depth) {
            Visit::Stop => break,
            Visit::Prune => continue,
            Visit::Expand => {}
        }

        for (edge_id, target) in graph.outgoing_edges(current) {
            visitor.visit_edge(edge_id, target, depth);
            if visited.contains(&target) {
                continue;
            }
            tree.parents.entry(target).or_insert(current);
            queue.push_back((target, depth + 1));
        }
    }

    tree
}

struct PathFinder {
    target: NodeId,
    found: bool,
}

impl BfsVisitor for PathFinder {
    fn visit_node(&mut self, node_id: NodeId, _depth: usize) -> Visit {
        if node_id == self.target {
            self.found = true;
            Visit::Stop
        } else {
            Visit::Expand
        }
    }
}

/// Finds a shortest directed path (by edge count) from `source` to `target`.
///
/// Ties between equally short paths go to the one whose edges were created
/// first. Returns an empty vector when `target` is unreachable and `[source]`
/// when both ends are the same node.
#[must_use]
pub fn shortest_path<G>(graph: &G, source: NodeId, target: NodeId) -> Vec<NodeId>
where
    G: GraphTraversal + ?Sized,
{
    let mut finder = PathFinder {
        target,
        found: false,
    };
    let tree = breadth_first(graph, source, &mut finder);
    if finder.found {
        tree.path_to(target)
    } else {
        Vec::new()
    }
}

/// Nodes and edges discovered by a bounded expansion, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighborhood {
    /// Reached nodes, each once, start node first.
    pub nodes: Vec<NodeId>,
    /// Edges followed out of nodes closer than the bound, each once.
    pub edges: Vec<EdgeId>,
}

struct NeighborhoodCollector {
    max_depth: usize,
    nodes: Vec<NodeId>,
    edges: IndexSet<EdgeId>,
}

impl BfsVisitor for NeighborhoodCollector {
    fn visit_node(&mut self, node_id: NodeId, depth: usize) -> Visit {
        if depth > self.max_depth {
            return Visit::Prune;
        }
        self.nodes.push(node_id);
        if depth == self.max_depth {
            Visit::Prune
        } else {
            Visit::Expand
        }
    }

    fn visit_edge(&mut self, edge_id: EdgeId, _target: NodeId, _depth: usize) {
        self.edges.insert(edge_id);
    }
}

/// Expands up to `depth` hops from `start` over outgoing edges.
///
/// Every edge leaving a node at distance `< depth` is reported, including
/// edges into nodes reached earlier, so the edge set is not a spanning tree.
/// `depth == 0` yields only the start node.
#[must_use]
pub fn neighborhood<G>(graph: &G, start: NodeId, depth: usize) -> Neighborhood
where
    G: GraphTraversal + ?Sized,
{
    let mut collector = NeighborhoodCollector {
        max_depth: depth,
        nodes: Vec::new(),
        edges: IndexSet::new(),
    };
    breadth_first(graph, start, &mut collector);
    Neighborhood {
        nodes: collector.nodes,
        edges: collector.edges.into_iter().collect(),
    }
}
