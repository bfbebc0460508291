//! Graph algorithms.
//!
//! Every engine reads a [`Graph`](crate::Graph) through its adjacency API and
//! never mutates it. All scratch state (visited sets, distance maps, heaps,
//! colors) is allocated per call, so one engine value may be used from several
//! threads at once as long as the graph is not mutated concurrently.
//!
//! # Modules
//!
//! - [`traversal`] - BFS/DFS strategies behind [`GraphTraversal`]
//! - [`shortest_path`] - [`Dijkstra`], [`BellmanFord`] and path observers
//! - [`mst`] - [`Kruskal`] and [`Prim`]
//! - [`topological_sort`] - Ordering of directed acyclic graphs
//! - [`find_cycle`], [`find_all_cycles`], [`has_cycle`] - Cycle detection
//!
//! # Examples
//!
//! ```rust
//! use graphworks::{
//!     algorithms::{find_cycle, topological_sort, Dijkstra},
//!     Graph, PathFinder,
//! };
//!
//! let mut graph = Graph::directed();
//! graph.add_edge("fetch", "parse", 1.0);
//! graph.add_edge("parse", "check", 2.0);
//! graph.add_edge("fetch", "check", 5.0);
//!
//! assert!(find_cycle(&graph)?.is_none());
//! assert_eq!(topological_sort(&graph)?, vec!["fetch", "parse", "check"]);
//! assert_eq!(
//!     Dijkstra::new(true).find_path(&graph, &"fetch", &"check")?,
//!     vec!["fetch", "parse", "check"]
//! );
//! # Ok::<(), graphworks::Error>(())
//! ```

pub mod mst;
pub mod shortest_path;
pub mod traversal;

mod cycles;
mod topological;

pub use cycles::{find_all_cycles, find_cycle, has_cycle};
pub use mst::{Kruskal, MinimumSpanningTree, Prim};
pub use shortest_path::{
    manhattan_distance, BellmanFord, CostFunction, Dijkstra, EdgeWeight, Heuristic, LogObserver,
    ObservedPathFinder, PathFinder, PathFinderStats, PathObserver, ShortestPath,
};
pub use topological::topological_sort;
pub use traversal::{
    BfsIterative, BfsRecursive, DfsIterative, DfsRecursive, GraphTraversal, TraversalKind,
    TraversalRunner, Visitor,
};
