//! Benchmarks for the algorithm engines.
//!
//! Every benchmark runs over graphs from the seeded generator, so numbers are
//! comparable between runs:
//! - Traversal strategies over a sparse undirected graph
//! - Dijkstra, A* and Bellman-Ford shortest paths
//! - Kruskal and Prim spanning trees
//! - Topological sort and cycle detection over a layered DAG

extern crate graphworks;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphworks::{
    algorithms::{
        find_all_cycles, manhattan_distance, topological_sort, BellmanFord, Dijkstra, Kruskal,
        Prim, TraversalKind,
    },
    GeneratorOptions, Graph, GraphGenerator, PathFinder,
};
use std::hint::black_box;
use strum::IntoEnumIterator;

fn random_graph(vertices: usize, probability: f64, directed: bool) -> Graph<usize> {
    let options = GeneratorOptions::default()
        .vertices(vertices)
        .probability(probability)
        .directed(directed)
        .weights(1.0, 100.0);
    GraphGenerator::new(options).generate(|i| i).unwrap()
}

fn grid(size: i32) -> Graph<(i32, i32)> {
    let mut graph = Graph::undirected();
    for x in 0..size {
        for y in 0..size {
            if x + 1 < size {
                graph.add_edge((x, y), (x + 1, y), 1.0);
            }
            if y + 1 < size {
                graph.add_edge((x, y), (x, y + 1), 1.0);
            }
        }
    }
    graph
}

/// Benchmark each traversal strategy over the same sparse graph.
fn bench_traversals(c: &mut Criterion) {
    // shallow enough for the recursive variants at the default depth limit
    let graph = random_graph(500, 0.02, false);
    let mut group = c.benchmark_group("traversal");

    for kind in TraversalKind::iter() {
        let strategy = kind.strategy::<usize>();
        group.bench_function(BenchmarkId::from_parameter(kind), |b| {
            b.iter(|| {
                let order = strategy.visit_order(black_box(&graph), &0);
                black_box(order)
            });
        });
    }
    group.finish();
}

/// Benchmark shortest path engines for growing graph sizes.
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for size in [100usize, 400] {
        let graph = random_graph(size, 0.05, true);
        let last = size - 1;

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, graph| {
            let engine = Dijkstra::new(true);
            b.iter(|| black_box(engine.search(graph, &0, &last)));
        });
        group.bench_with_input(BenchmarkId::new("bellman-ford", size), &graph, |b, graph| {
            let engine = BellmanFord::new();
            b.iter(|| black_box(engine.search(graph, &0, &last)));
        });
    }

    let maze = grid(40);
    group.bench_function("dijkstra_grid", |b| {
        let engine = Dijkstra::new(true);
        b.iter(|| black_box(engine.search(&maze, &(0, 0), &(39, 39))));
    });
    group.bench_function("a_star_grid", |b| {
        let engine = Dijkstra::new(true).with_heuristic(manhattan_distance);
        b.iter(|| black_box(engine.search(&maze, &(0, 0), &(39, 39))));
    });
    group.finish();
}

/// Benchmark Kruskal against Prim on dense and sparse graphs.
fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");

    for probability in [0.02, 0.2] {
        let graph = random_graph(300, probability, false);
        group.bench_with_input(BenchmarkId::new("kruskal", probability), &graph, |b, graph| {
            let engine = Kruskal::new();
            b.iter(|| black_box(engine.spanning_tree(graph)));
        });
        group.bench_with_input(BenchmarkId::new("prim", probability), &graph, |b, graph| {
            let engine = Prim::new();
            b.iter(|| black_box(engine.spanning_tree(graph, &0)));
        });
    }
    group.finish();
}

/// Benchmark ordering and cycle detection; generated directed graphs are acyclic.
fn bench_ordering(c: &mut Criterion) {
    let graph = random_graph(1000, 0.01, true);

    c.bench_function("topological_sort", |b| {
        b.iter(|| black_box(topological_sort(black_box(&graph))));
    });
    c.bench_function("find_all_cycles", |b| {
        b.iter(|| black_box(find_all_cycles(black_box(&graph))));
    });
}

criterion_group!(
    benches,
    bench_traversals,
    bench_shortest_paths,
    bench_spanning_trees,
    bench_ordering
);
criterion_main!(benches);
