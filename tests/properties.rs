//! Property tests over randomly generated graphs.
//!
//! Graphs come from [`GraphGenerator`] with proptest-chosen sizes, densities and
//! seeds, so every failure shrinks to a reproducible seed.

use std::collections::HashSet;

use graphworks::{
    algorithms::{
        has_cycle, topological_sort, BellmanFord, Dijkstra, Kruskal, Prim, TraversalKind,
    },
    Error, GeneratorOptions, Graph, GraphGenerator, PathFinder,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

const TOLERANCE: f64 = 1e-9;

fn generate(options: GeneratorOptions) -> Graph<usize> {
    GraphGenerator::new(options)
        .generate(|i| i)
        .expect("generator options are valid")
}

fn options() -> impl Strategy<Value = GeneratorOptions> {
    (1usize..40, 0.0f64..0.4, any::<u64>(), any::<bool>()).prop_map(
        |(vertices, probability, seed, directed)| {
            GeneratorOptions::default()
                .vertices(vertices)
                .probability(probability)
                .directed(directed)
                .weights(0.5, 25.0)
                .seed(seed)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dijkstra_and_bellman_ford_agree(options in options()) {
        let graph = generate(options);
        let last = graph.vertex_count() - 1;

        let dijkstra = Dijkstra::new(true).search(&graph, &0, &last);
        let bellman_ford = BellmanFord::new().search(&graph, &0, &last);

        match (dijkstra, bellman_ford) {
            (Ok(a), Ok(b)) => {
                prop_assert!((a.cost - b.cost).abs() < TOLERANCE);
                prop_assert_eq!(a.path.first(), Some(&0));
                prop_assert_eq!(a.path.last(), Some(&last));
                for hop in a.path.windows(2) {
                    prop_assert!(graph.contains_edge(&hop[0], &hop[1]));
                }
            }
            (Err(a), Err(b)) => {
                let no_path = matches!(a, Error::NoPathFound { .. });
                prop_assert!(no_path, "unexpected error {:?}", a);
                prop_assert_eq!(a, b);
            }
            (a, b) => prop_assert!(false, "engines disagree: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn kruskal_and_prim_agree_on_connected_graphs(
        options in options(),
        chain_weight in 1.0f64..30.0,
    ) {
        let mut graph = generate(options.directed(false));
        for i in 1..graph.vertex_count() {
            graph.add_edge(i - 1, i, chain_weight);
        }

        let kruskal = Kruskal::new().spanning_tree(&graph).unwrap();
        let prim = Prim::new().spanning_tree(&graph, &0).unwrap();

        prop_assert!(kruskal.is_spanning_tree(graph.vertex_count()));
        prop_assert!(prim.is_spanning_tree(graph.vertex_count()));
        prop_assert!((kruskal.total_weight - prim.total_weight).abs() < 1e-6);
    }

    #[test]
    fn traversals_visit_each_reachable_vertex_once(options in options()) {
        let graph = generate(options);
        let mut reached: Vec<HashSet<usize>> = Vec::new();

        for kind in TraversalKind::iter() {
            let order = kind.strategy::<usize>().visit_order(&graph, &0).unwrap();
            let unique: HashSet<usize> = order.iter().copied().collect();

            prop_assert_eq!(order.first(), Some(&0));
            prop_assert_eq!(unique.len(), order.len());
            reached.push(unique);
        }

        for set in &reached[1..] {
            prop_assert_eq!(set, &reached[0]);
        }
    }

    #[test]
    fn undirected_edges_are_mirrored(options in options()) {
        let graph = generate(options.directed(false));
        for edge in graph.edges() {
            prop_assert!(graph.contains_edge(edge.destination(), edge.source()));
        }
        prop_assert_eq!(graph.edges().count(), graph.edge_count() * 2);
    }

    #[test]
    fn removed_vertices_leave_no_dangling_edges(
        options in options(),
        victim in any::<prop::sample::Index>(),
    ) {
        let mut graph = generate(options);
        let count = graph.vertex_count();
        let vertex = victim.index(count);

        prop_assert!(graph.remove_vertex(&vertex));
        prop_assert!(!graph.contains_vertex(&vertex));
        prop_assert_eq!(graph.vertex_count(), count - 1);
        prop_assert!(graph
            .edges()
            .all(|edge| *edge.source() != vertex && *edge.destination() != vertex));
    }

    #[test]
    fn topological_order_respects_forward_edges(options in options()) {
        let source = generate(options);
        let mut dag = Graph::directed();
        for vertex in source.vertices() {
            dag.add_vertex(*vertex);
        }
        for edge in source.edges() {
            let (a, b) = (*edge.source(), *edge.destination());
            if a < b {
                dag.add_edge(a, b, None);
            }
        }

        prop_assert!(!has_cycle(&dag).unwrap());
        let order = topological_sort(&dag).unwrap();
        prop_assert_eq!(order.len(), dag.vertex_count());

        let mut position = vec![0; order.len()];
        for (index, vertex) in order.iter().enumerate() {
            position[*vertex] = index;
        }
        for edge in dag.edges() {
            prop_assert!(position[*edge.source()] < position[*edge.destination()]);
        }
    }

    #[test]
    fn paths_start_and_end_at_endpoints(options in options()) {
        let graph = generate(options);
        let last = graph.vertex_count() - 1;

        if let Ok(path) = Dijkstra::new(false).find_path(&graph, &last, &0) {
            prop_assert_eq!(path.first(), Some(&last));
            prop_assert_eq!(path.last(), Some(&0));
        }
    }
}
