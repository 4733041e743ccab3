//! Benchmarks for the core graph operations.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use netalgo_core::Node;
use netalgo_graph::traversal::{BfsTraversal, Direction};
use netalgo_graph::Graph;

/// Benchmark distinct node insertion.
fn bench_add_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_add_node");

    for size in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_function(format!("distinct_{size}"), |b| {
            b.iter_batched(
                || Graph::with_capacity(size as usize, 0),
                |mut graph| {
                    for i in 0..size {
                        graph.add_node(Node::<u64>::new(i));
                    }
                    black_box(graph.node_count())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark insertion where most calls hit the dedup path.
fn bench_add_node_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_add_node_duplicates");

    let mut rng = StdRng::seed_from_u64(7);
    let mut labels: Vec<u64> = (0..10_000).map(|i| i % 100).collect();
    labels.shuffle(&mut rng);

    group.throughput(Throughput::Elements(labels.len() as u64));
    group.bench_function("hot_dedup", |b| {
        b.iter_batched(
            || Graph::with_capacity(100, 0),
            |mut graph| {
                for &label in &labels {
                    graph.add_node(Node::<u64>::new(label));
                }
                black_box(graph.node_count())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark BFS over a chain graph.
fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_bfs");

    for size in [100u64, 1_000] {
        let mut graph = Graph::with_capacity(size as usize, size as usize);
        let (start, _) = graph.add_node(Node::<u64>::new(0));
        for i in 1..size {
            graph.add_node(Node::<u64>::new(i));
        }
        for i in 0..size - 1 {
            graph
                .add_edge(&i, &(i + 1))
                .expect("chain endpoints exist");
        }

        group.throughput(Throughput::Elements(size));
        group.bench_function(format!("chain_{size}"), |b| {
            b.iter(|| {
                let results = BfsTraversal::new(start, Direction::Outgoing).execute(&graph);
                black_box(results.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_node, bench_add_node_duplicates, bench_bfs);
criterion_main!(benches);
