//! Graph data model.
//!
//! This module provides the mutable adjacency structure every engine in the crate
//! operates on, together with its edge type and a seeded random generator for
//! building test and benchmark inputs.
//!
//! # Architecture
//!
//! A [`Graph`] owns an insertion-ordered map from vertex to its outgoing [`Edge`]s.
//! Vertices are caller-chosen values (integers, strings, coordinates); any type that
//! is cloneable, hashable, comparable for equality and debug-printable qualifies as
//! a [`Vertex`] automatically.
//!
//! Directedness is fixed at construction. In an undirected graph every edge is
//! stored twice, once under each endpoint, and both copies are added or removed
//! together.
//!
//! # Key Components
//!
//! - [`Graph`] - Adjacency storage and mutation API
//! - [`Edge`] - Immutable `(source, destination, weight?)` triple
//! - [`Vertex`] - Marker trait for vertex key types
//! - [`GraphGenerator`] / [`GeneratorOptions`] - Reproducible random graphs
//!
//! # Thread Safety
//!
//! `Graph<T>` is [`Send`] and [`Sync`] whenever `T` is. The graph carries no
//! internal synchronization: concurrent reads (including concurrent engine runs)
//! are safe, mutation must be serialized by the caller.

mod adjacency;
mod edge;
mod generator;

pub use adjacency::Graph;
pub use edge::Edge;
pub use generator::{GeneratorOptions, GraphGenerator};

use std::{fmt::Debug, hash::Hash};

/// Types usable as graph vertices.
///
/// Implemented automatically for every `Clone + Eq + Hash + Debug` type. The
/// `Debug` bound is used to render vertices into error messages.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}
