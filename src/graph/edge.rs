//! Edge type stored in a graph's adjacency lists.

use std::fmt;

use crate::graph::Vertex;

/// An immutable `(source, destination, weight?)` triple.
///
/// A missing weight means the edge is unweighted. How an engine interprets that is
/// controlled by its [`WeightPolicy`](crate::config::WeightPolicy).
///
/// # Examples
///
/// ```rust
/// use graphworks::Edge;
///
/// let edge = Edge::new('A', 'B', Some(2.5));
/// assert_eq!(edge.source(), &'A');
/// assert_eq!(edge.destination(), &'B');
/// assert_eq!(edge.weight(), Some(2.5));
/// assert_eq!(edge.reversed().source(), &'B');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T: Vertex> {
    source: T,
    destination: T,
    weight: Option<f64>,
}

impl<T: Vertex> Edge<T> {
    /// Creates a new edge.
    pub fn new(source: T, destination: T, weight: Option<f64>) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }

    /// The vertex this edge leaves from.
    #[must_use]
    pub fn source(&self) -> &T {
        &self.source
    }

    /// The vertex this edge points to.
    #[must_use]
    pub fn destination(&self) -> &T {
        &self.destination
    }

    /// The edge weight, if any.
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Returns `true` if the edge carries a weight.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    /// Returns the same edge pointing the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Edge {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight,
        }
    }
}

impl<T: Vertex + fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(weight) => write!(f, "{} -> {} ({})", self.source, self.destination, weight),
            None => write!(f, "{} -> {}", self.source, self.destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let edge = Edge::new(1, 2, None);
        assert_eq!(edge.source(), &1);
        assert_eq!(edge.destination(), &2);
        assert!(!edge.is_weighted());
        assert_eq!(edge.weight(), None);
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(1, 2, Some(4.5)).to_string(), "1 -> 2 (4.5)");
        assert_eq!(Edge::new("a", "b", None).to_string(), "a -> b");
    }
}
