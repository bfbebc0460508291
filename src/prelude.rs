//! # graphworks Prelude
//!
//! Re-exports the types and traits needed for everyday graph work, so a single
//! `use graphworks::prelude::*;` is enough for most programs.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphworks operations
pub use crate::Error;

/// The result type used throughout graphworks
pub use crate::Result;

// ================================================================================================
// Graph Container
// ================================================================================================

/// Adjacency-list graph, its edges and the vertex bound
pub use crate::graph::{Edge, Graph, Vertex};

/// Seeded random graph generation
pub use crate::graph::{GeneratorOptions, GraphGenerator};

// ================================================================================================
// Configuration
// ================================================================================================

/// Engine policies and limits
pub use crate::config::{SpanningPolicy, TraversalConfig, WeightPolicy};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversal strategies and their runtime selection
pub use crate::algorithms::{
    BfsIterative, BfsRecursive, DfsIterative, DfsRecursive, GraphTraversal, TraversalKind,
    TraversalRunner,
};

/// Shortest path engines and search statistics
pub use crate::algorithms::{
    BellmanFord, Dijkstra, LogObserver, ObservedPathFinder, PathFinder, PathFinderStats,
    ShortestPath,
};

/// Minimum spanning tree engines
pub use crate::algorithms::{Kruskal, MinimumSpanningTree, Prim};

/// Ordering and cycle detection
pub use crate::algorithms::{find_all_cycles, find_cycle, has_cycle, topological_sort};
