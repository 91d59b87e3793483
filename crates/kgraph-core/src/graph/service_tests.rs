//! Tests for GraphService domain rules, path search and traversal.

use super::service::GraphService;
use super::store::GraphStore;
use super::types::{EdgePatch, NewEdge, NewNode, NodeId, NodePatch, RelationshipType};
use crate::error::{Error, ErrorKind};

fn node(service: &GraphService, title: &str) -> NodeId {
    service.create_node(NewNode::new(title, format!("{title} summary"))).id
}

fn link(service: &GraphService, source: NodeId, target: NodeId) {
    service
        .create_edge(NewEdge::new(RelationshipType::RelatesTo, source, target))
        .unwrap();
}

fn titles(nodes: &[super::NodeResponse]) -> Vec<&str> {
    nodes.iter().map(|n| n.title.as_str()).collect()
}

#[test]
fn test_round_trip_node() {
    let service = GraphService::default();
    let created = service.create_node(
        NewNode::new("GraphQL", "A query language")
            .with_tags(vec!["api".to_string(), "schema".to_string()]),
    );

    let fetched = service.get_node(created.id).unwrap();
    assert_eq!(fetched, created);
    assert!(fetched.updated_at >= fetched.created_at);
}

#[test]
fn test_partial_update() {
    let service = GraphService::default();
    let created = service.create_node(NewNode::new("Title", "Old").with_tags(vec!["t".into()]));

    let updated = service
        .update_node(created.id, NodePatch::default().summary("Updated summary"))
        .unwrap();
    assert_eq!(updated.title, "Title");
    assert_eq!(updated.summary, "Updated summary");
    assert_eq!(updated.tags, vec!["t".to_string()]);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn test_update_and_delete_missing_node() {
    let service = GraphService::default();
    let ghost = NodeId::new_v4();
    assert_eq!(
        service.update_node(ghost, NodePatch::default().title("x")),
        Err(Error::NodeNotFound(ghost))
    );
    assert_eq!(service.delete_node(ghost), Err(Error::NodeNotFound(ghost)));
    assert_eq!(service.get_node(ghost), Err(Error::NodeNotFound(ghost)));
}

#[test]
fn test_cascading_delete() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let b = node(&service, "B");
    let edge = service
        .create_edge(NewEdge::new(RelationshipType::Supports, a, b))
        .unwrap();

    service.delete_node(a).unwrap();
    assert!(service.list_edges().is_empty());
    assert_eq!(service.get_edge(edge.id), Err(Error::EdgeNotFound(edge.id)));
    assert_eq!(service.stats().nodes, 1);
}

#[test]
fn test_no_self_loop() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let err = service
        .create_edge(NewEdge::new(RelationshipType::RelatesTo, a, a))
        .unwrap_err();
    assert_eq!(err, Error::SelfLoop(a));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(service.list_edges().is_empty());
}

#[test]
fn test_missing_endpoint() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let unknown: NodeId = "00000000-0000-0000-0000-000000000000".parse().unwrap();

    let err = service
        .create_edge(NewEdge::new(RelationshipType::RelatesTo, a, unknown))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(service.list_edges().is_empty());

    let err = service
        .create_edge(NewEdge::new(RelationshipType::RelatesTo, unknown, a))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_missing_endpoint_wins_over_self_loop() {
    let service = GraphService::default();
    let ghost = NodeId::new_v4();
    let err = service
        .create_edge(NewEdge::new(RelationshipType::RelatesTo, ghost, ghost))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_edge_update_and_delete() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let b = node(&service, "B");
    let edge = service
        .create_edge(
            NewEdge::new(RelationshipType::Supports, a, b).with_description("Edge between A and B"),
        )
        .unwrap();

    let updated = service
        .update_edge(
            edge.id,
            EdgePatch::default().relationship(RelationshipType::Contradicts),
        )
        .unwrap();
    assert_eq!(updated.relationship, RelationshipType::Contradicts);
    assert_eq!(updated.description.as_deref(), Some("Edge between A and B"));
    assert_eq!(updated.source_id, a);
    assert_eq!(updated.created_at, edge.created_at);

    service.delete_edge(edge.id).unwrap();
    assert_eq!(service.delete_edge(edge.id), Err(Error::EdgeNotFound(edge.id)));
}

#[test]
fn test_shortest_path_scenarios() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let b = node(&service, "B");
    let c = node(&service, "C");
    link(&service, a, b);
    link(&service, b, c);

    assert_eq!(titles(&service.find_path(a, c).unwrap()), ["A", "B", "C"]);
    assert!(service.find_path(c, a).unwrap().is_empty());
    assert_eq!(titles(&service.find_path(a, a).unwrap()), ["A"]);
}

#[test]
fn test_find_path_missing_endpoint() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let ghost = NodeId::new_v4();
    assert_eq!(
        service.find_path(a, ghost),
        Err(Error::EndpointNotFound {
            source_id: a,
            target_id: ghost
        })
    );
}

#[test]
fn test_bounded_traversal() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let b = node(&service, "B");
    let c = node(&service, "C");
    let d = node(&service, "D");
    link(&service, a, b);
    link(&service, b, c);
    link(&service, c, d);

    let one = service.traverse(a, 1).unwrap();
    assert_eq!(one.start_id, a);
    assert_eq!(one.depth, 1);
    assert_eq!(titles(&one.nodes), ["A", "B"]);
    assert_eq!(one.edges.len(), 1);
    assert_eq!((one.edges[0].source_id, one.edges[0].target_id), (a, b));

    let zero = service.traverse(a, 0).unwrap();
    assert_eq!(titles(&zero.nodes), ["A"]);
    assert!(zero.edges.is_empty());

    let two = service.traverse(a, 2).unwrap();
    assert_eq!(titles(&two.nodes), ["A", "B", "C"]);
    assert_eq!(two.edges.len(), 2);
}

#[test]
fn test_traverse_missing_start() {
    let service = GraphService::default();
    let ghost = NodeId::new_v4();
    assert_eq!(service.traverse(ghost, 2), Err(Error::StartNotFound(ghost)));
}

#[test]
fn test_idempotent_reads() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let b = node(&service, "B");
    link(&service, a, b);
    link(&service, b, a);

    assert_eq!(service.list_nodes(), service.list_nodes());
    assert_eq!(service.list_edges(), service.list_edges());
}

#[test]
fn test_node_degree() {
    let service = GraphService::default();
    let a = node(&service, "A");
    let b = node(&service, "B");
    let c = node(&service, "C");
    link(&service, a, b);
    link(&service, c, b);

    assert_eq!(service.node_degree(b).unwrap(), (2, 0));
    assert_eq!(service.node_degree(a).unwrap(), (0, 1));
    assert!(service.node_degree(NodeId::new_v4()).is_err());
}

#[test]
fn test_service_owns_explicit_store() {
    let mut store = GraphStore::new();
    store.create_node(NewNode::new("Preloaded", "from store"));

    let service = GraphService::new(store);
    assert_eq!(titles(&service.list_nodes()), ["Preloaded"]);

    assert_eq!(service.stats().nodes, 1);
}

#[test]
fn test_concurrent_reads_and_writes() {
    use std::sync::Arc;

    let service = Arc::new(GraphService::default());
    let hub = node(&service, "hub");

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                for j in 0..25 {
                    let leaf = service
                        .create_node(NewNode::new(format!("leaf-{i}-{j}"), "leaf"))
                        .id;
                    service
                        .create_edge(NewEdge::new(RelationshipType::Supports, hub, leaf))
                        .unwrap();
                    let _ = service.traverse(hub, 1).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = service.stats();
    assert_eq!(stats.nodes, 101);
    assert_eq!(stats.edges, 100);
    assert_eq!(service.traverse(hub, 1).unwrap().nodes.len(), 101);
}
