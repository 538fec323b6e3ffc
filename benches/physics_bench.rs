//! Tick throughput of the exact and the Barnes-Hut repulsion.
//!
//! Run with: cargo bench --bench physics_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use newsgraph::prelude::*;
use petgraph::{Graph, Undirected};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

const KINDS: [&str; 4] = ["Person", "Organization", "Place", "NewsArticle"];

fn scale_free_graph(nodes: usize) -> GraphData {
    let mut rng = StdRng::seed_from_u64(1);
    let graph: Graph<(), (), Undirected> =
        petgraph_gen::barabasi_albert_graph(&mut rng, nodes, 1, None);
    GraphData::from_petgraph(&graph, |index, _| {
        NodeSpec::new(index.index().to_string(), KINDS[index.index() % KINDS.len()])
    })
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for nodes in [100, 500, 2000] {
        let data = scale_free_graph(nodes);

        for (name, theta) in [("pairwise", 0.0), ("barnes_hut", 0.75)] {
            let mut simulator = Simulator::builder()
                .simulation_accuracy(theta)
                .seed(1)
                .build(ManualFrames::default());
            simulator.load_data(&data);

            group.bench_with_input(BenchmarkId::new(name, nodes), &nodes, |b, _| {
                b.iter(|| black_box(simulator.advance()));
            });
        }
    }

    group.finish();
}

fn bench_many_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_body");
    let mut simulator = Simulator::builder().seed(1).build(ManualFrames::default());
    simulator.load_data(&scale_free_graph(1000));
    let bodies: Vec<Vec2> = simulator.positions().into_iter().map(|(_, p)| p).collect();
    let mut forces = vec![Vec2::ZERO; bodies.len()];

    group.bench_function("pairwise_1000", |b| {
        b.iter(|| Pairwise.accumulate(black_box(&bodies), 5000.0, &mut forces));
    });
    group.bench_function("barnes_hut_1000", |b| {
        b.iter(|| BarnesHut::default().accumulate(black_box(&bodies), 5000.0, &mut forces));
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_many_body);
criterion_main!(benches);
