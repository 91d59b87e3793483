//! Benchmark graph traversal.
//!
//! Run with: `cargo bench --bench graph_benchmark`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kgraph_core::graph::traversal::{neighborhood, shortest_path};
use kgraph_core::graph::{GraphStore, NewEdge, NewNode, NodeId, RelationshipType};

/// Layered graph: every node links to `fanout` nodes of the next layer.
fn layered_graph(layers: usize, width: usize, fanout: usize) -> (GraphStore, Vec<Vec<NodeId>>) {
    let mut store = GraphStore::with_capacity(layers * width, layers * width * fanout);
    let grid: Vec<Vec<NodeId>> = (0..layers)
        .map(|l| {
            (0..width)
                .map(|w| store.create_node(NewNode::new(format!("{l}-{w}"), "bench")).id())
                .collect()
        })
        .collect();
    for pair in grid.windows(2) {
        for (i, &source) in pair[0].iter().enumerate() {
            for k in 0..fanout {
                let target = pair[1][(i + k) % width];
                store.create_edge(NewEdge::new(RelationshipType::RelatesTo, source, target));
            }
        }
    }
    (store, grid)
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for layers in &[4, 16, 64] {
        let (store, grid) = layered_graph(*layers, 32, 3);
        let source = grid[0][0];
        let target = grid[layers - 1][31];

        group.bench_with_input(BenchmarkId::new("layered", layers), layers, |bencher, _| {
            bencher.iter(|| shortest_path(black_box(&store), source, target));
        });
    }

    group.finish();
}

fn bench_neighborhood(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood");
    let (store, grid) = layered_graph(16, 64, 4);
    let start = grid[0][0];

    for depth in &[1, 3, 5] {
        group.bench_with_input(BenchmarkId::new("depth", depth), depth, |bencher, &depth| {
            bencher.iter(|| neighborhood(black_box(&store), start, depth));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shortest_path, bench_neighborhood);
criterion_main!(benches);
