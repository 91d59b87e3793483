//! Demo dataset: three concepts and the relationships between them.

use crate::error::Result;
use crate::graph::{GraphService, NewEdge, NewNode, NodeResponse, RelationshipType};

/// Nodes created by [`load_demo_graph`], in creation order.
#[derive(Debug, Clone)]
pub struct DemoGraph {
    /// "Knowledge Graphs" concept.
    pub knowledge_graphs: NodeResponse,
    /// "Semantic Search" concept.
    pub semantic_search: NodeResponse,
    /// "UX Patterns" concept.
    pub ux_patterns: NodeResponse,
}

/// Inserts the demo concepts and relationships into `service`.
///
/// Idempotent: a concept whose title already exists is reused, and a
/// relationship with the same type, source and target is not added twice.
pub fn load_demo_graph(service: &GraphService) -> Result<DemoGraph> {
    let knowledge_graphs = upsert_concept(
        service,
        NewNode::new(
            "Knowledge Graphs",
            "Data models that capture entities and relationships for flexible querying.",
        )
        .with_tags(vec!["graph".to_string()]),
    );
    let semantic_search = upsert_concept(
        service,
        NewNode::new(
            "Semantic Search",
            "Finding meaning-aware results by leveraging embeddings and graph context.",
        )
        .with_tags(vec!["ai".to_string()]),
    );
    let ux_patterns = upsert_concept(
        service,
        NewNode::new(
            "UX Patterns",
            "Reusable interaction designs that improve usability and consistency.",
        )
        .with_tags(vec!["design".to_string()]),
    );

    let relationships = [
        NewEdge::new(
            RelationshipType::DerivesFrom,
            semantic_search.id,
            knowledge_graphs.id,
        )
        .with_description("Semantic search builds on knowledge graph structure for relevance."),
        NewEdge::new(
            RelationshipType::Supports,
            ux_patterns.id,
            knowledge_graphs.id,
        )
        .with_description("UX patterns help teams surface graph insights in understandable ways."),
        NewEdge::new(
            RelationshipType::RelatesTo,
            ux_patterns.id,
            semantic_search.id,
        )
        .with_description("UX patterns can drive semantic search results presentation."),
    ];

    let existing = service.list_edges();
    let mut added = 0;
    for edge in relationships {
        let duplicate = existing.iter().any(|e| {
            e.relationship == edge.relationship
                && e.source_id == edge.source_id
                && e.target_id == edge.target_id
        });
        if !duplicate {
            service.create_edge(edge)?;
            added += 1;
        }
    }

    tracing::info!(edges_added = added, "Demo graph loaded");

    Ok(DemoGraph {
        knowledge_graphs,
        semantic_search,
        ux_patterns,
    })
}

/// Returns the node titled `input.title`, creating it if absent.
fn upsert_concept(service: &GraphService, input: NewNode) -> NodeResponse {
    match service
        .list_nodes()
        .into_iter()
        .find(|n| n.title == input.title)
    {
        Some(node) => {
            tracing::debug!(title = %node.title, "Demo concept already present");
            node
        }
        None => service.create_node(input),
    }
}
