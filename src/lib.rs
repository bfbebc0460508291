// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphworks
//!
//! A generic graph container and a library of classic graph algorithms over it.
//!
//! Vertices may be any type that is `Clone + Eq + Hash + Debug` (see [`Vertex`]). Edges carry an
//! optional `f64` weight, and a graph is either directed or undirected for its whole lifetime.
//!
//! ## Features
//!
//! - **Adjacency-list graph** - Insertion-ordered vertices and edges, so every algorithm is
//!   deterministic for a given construction sequence
//! - **Traversal strategies** - Iterative and recursive BFS/DFS behind one trait, selectable at
//!   runtime through [`algorithms::TraversalRunner`]
//! - **Shortest paths** - Dijkstra (with optional A* heuristic) and Bellman-Ford with negative
//!   cycle detection, plus observer hooks reporting per-search statistics
//! - **Spanning trees** - Kruskal over a disjoint set and Prim over a binary min-heap
//! - **Ordering and cycles** - Topological sorting and three-color cycle detection
//! - **Random graphs** - Seeded Erdős-Rényi style generation for tests and benchmarks
//!
//! ## Quick Start
//!
//! ```rust
//! use graphworks::prelude::*;
//!
//! let mut graph = Graph::directed();
//! graph.add_edge(1, 2, 1.0);
//! graph.add_edge(1, 3, 2.5);
//! graph.add_edge(2, 4, 7.0);
//! graph.add_edge(3, 4, 1.0);
//!
//! let path = Dijkstra::new(true).find_path(&graph, &1, &4)?;
//! assert_eq!(path, vec![1, 3, 4]);
//!
//! let order = TraversalKind::BfsIterative.strategy::<i32>().visit_order(&graph, &1)?;
//! assert_eq!(order, vec![1, 2, 3, 4]);
//! # Ok::<(), graphworks::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The [`Graph`] container, [`Edge`] and the random [`GraphGenerator`]
//! - [`algorithms`] - Traversals, shortest paths, spanning trees, topological sort, cycles
//! - [`collections`] - [`collections::DisjointSet`], [`collections::MinHeap`] and hash aliases
//! - [`config`] - Weight, spanning and recursion policies shared by the engines
//! - [`Error`] and [`Result`] - Error handling for every fallible operation
//!
//! ## Concurrency
//!
//! Engines hold only configuration and allocate all working state per call. Any number of
//! threads may run algorithms over a shared `&Graph` at the same time; mutation requires
//! exclusive access, which the borrow checker enforces.
//!
//! ## Logging
//!
//! The library emits diagnostics through the [`log`](https://docs.rs/log) facade: engine
//! summaries at `debug`, per-step decisions at `trace`, and [`algorithms::LogObserver`] reports at
//! `info`. Install any logger implementation in the host application to see them.

#[macro_use]
pub(crate) mod error;

/// Classic graph algorithms.
///
/// All engines take the graph by shared reference and return owned results.
///
/// # Examples
///
/// ```rust
/// use graphworks::{algorithms::Kruskal, Graph};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge('a', 'b', 4.0);
/// graph.add_edge('b', 'c', 1.0);
/// graph.add_edge('a', 'c', 2.0);
///
/// let tree = Kruskal::new().spanning_tree(&graph)?;
/// assert_eq!(tree.total_weight, 3.0);
/// # Ok::<(), graphworks::Error>(())
/// ```
pub mod algorithms;

/// Supporting data structures used by the algorithms.
pub mod collections;

/// Engine policies and limits.
pub mod config;

/// The graph container and random graph generation.
pub mod graph;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphworks::prelude::*;
///
/// let mut graph: Graph<u32> = Graph::undirected();
/// graph.add_edge(1, 2, None);
/// assert!(!has_cycle(&graph)?);
/// # Ok::<(), graphworks::Error>(())
/// ```
pub mod prelude;

/// `graphworks` Error type
///
/// The main error type for all operations in this crate.
///
/// # Examples
///
/// ```rust
/// use graphworks::{Error, Graph};
///
/// let graph: Graph<u8> = Graph::directed();
/// match graph.neighbors(&7) {
///     Err(Error::VertexNotFound(vertex)) => assert_eq!(vertex, "7"),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub use error::Error;

/// `graphworks` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub use error::Result;

pub use algorithms::{GraphTraversal, PathFinder};
pub use graph::{Edge, GeneratorOptions, Graph, GraphGenerator, Vertex};
