//! Seeded random graph generation.
//!
//! Produces Erdős–Rényi style graphs: every unordered vertex pair `(i, j)` with
//! `i < j` is connected with a fixed probability. Generation is fully determined by
//! [`GeneratorOptions::seed`], so the same options always produce the same graph.

use rand::prelude::*;

use crate::{
    graph::{Graph, Vertex},
    Error, Result,
};

/// Parameters for [`GraphGenerator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorOptions {
    /// Number of vertices to create
    pub vertex_count: usize,
    /// Probability in `[0, 1]` that a given vertex pair is connected
    pub edge_probability: f64,
    /// Whether the generated graph is directed
    pub directed: bool,
    /// Whether edges carry a weight
    pub weighted: bool,
    /// Lower weight bound (inclusive)
    pub min_weight: f64,
    /// Upper weight bound (exclusive)
    pub max_weight: f64,
    /// Seed for the random number generator
    pub seed: u64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            edge_probability: 0.2,
            directed: false,
            weighted: false,
            min_weight: 0.0,
            max_weight: 10.0,
            seed: 24452,
        }
    }
}

impl GeneratorOptions {
    /// Sets the number of vertices.
    #[must_use]
    pub fn vertices(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Sets the edge creation probability.
    #[must_use]
    pub fn probability(mut self, edge_probability: f64) -> Self {
        self.edge_probability = edge_probability;
        self
    }

    /// Sets directedness.
    #[must_use]
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Enables weights drawn uniformly from `[min, max)`.
    #[must_use]
    pub fn weights(mut self, min: f64, max: f64) -> Self {
        self.weighted = true;
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the options describe a valid generation run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the probability is outside
    /// `[0, 1]` or the weight range is inverted or not finite.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(Error::InvalidConfiguration(format!(
                "edge probability {} is outside [0, 1]",
                self.edge_probability
            )));
        }
        if self.weighted
            && (!self.min_weight.is_finite()
                || !self.max_weight.is_finite()
                || self.min_weight > self.max_weight)
        {
            return Err(Error::InvalidConfiguration(format!(
                "weight range [{}, {}) is invalid",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}

/// Builds random graphs from [`GeneratorOptions`].
///
/// # Examples
///
/// ```rust
/// use graphworks::{GeneratorOptions, GraphGenerator};
///
/// let options = GeneratorOptions::default().vertices(50).probability(0.1).weights(1.0, 5.0);
/// let graph = GraphGenerator::new(options).generate(|i| i)?;
///
/// assert_eq!(graph.vertex_count(), 50);
/// assert!(graph.is_weighted());
/// # Ok::<(), graphworks::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    options: GeneratorOptions,
}

impl GraphGenerator {
    /// Creates a generator for the given options.
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        GraphGenerator { options }
    }

    /// The options this generator runs with.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates a graph, naming vertex `i` with `vertex(i)`.
    ///
    /// Each call reseeds, so repeated calls return identical graphs.
    ///
    /// # Type Parameters
    ///
    /// * `T` - Vertex type of the generated graph
    /// * `F` - Maps a vertex index in `0..vertex_count` to its vertex value
    ///
    /// # Arguments
    ///
    /// * `vertex` - Called once per index for vertices and again for each edge endpoint
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the options fail validation.
    pub fn generate<T, F>(&self, vertex: F) -> Result<Graph<T>>
    where
        T: Vertex,
        F: Fn(usize) -> T,
    {
        self.options.validate()?;

        let opts = &self.options;
        let mut rng = StdRng::seed_from_u64(opts.seed);
        let mut graph = Graph::new(opts.directed);

        for i in 0..opts.vertex_count {
            graph.add_vertex(vertex(i));
        }

        for i in 0..opts.vertex_count {
            for j in (i + 1)..opts.vertex_count {
                if rng.gen::<f64>() > opts.edge_probability {
                    continue;
                }

                let weight = if opts.weighted {
                    Some(opts.min_weight + rng.gen::<f64>() * (opts.max_weight - opts.min_weight))
                } else {
                    None
                };
                graph.add_edge(vertex(i), vertex(j), weight);
            }
        }

        log::debug!(
            "generated graph with {} vertices and {} edges (seed {})",
            graph.vertex_count(),
            graph.edge_count(),
            opts.seed
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.vertex_count, 10);
        assert_eq!(options.edge_probability, 0.2);
        assert!(!options.directed);
        assert!(!options.weighted);
        assert_eq!(options.seed, 24452);
    }

    #[test]
    fn test_reproducible() {
        let generator =
            GraphGenerator::new(GeneratorOptions::default().vertices(30).weights(0.0, 10.0));
        let first = generator.generate(|i| i).unwrap();
        let second = generator.generate(|i| i).unwrap();

        let a: Vec<_> = first.edges().cloned().collect();
        let b: Vec<_> = second.edges().cloned().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_probability_bounds() {
        let empty = GraphGenerator::new(GeneratorOptions::default().probability(0.0))
            .generate(|i| i)
            .unwrap();
        assert_eq!(empty.edge_count(), 0);
        assert_eq!(empty.vertex_count(), 10);

        let complete = GraphGenerator::new(GeneratorOptions::default().vertices(6).probability(1.0))
            .generate(|i| i)
            .unwrap();
        assert_eq!(complete.edge_count(), 15);
    }

    #[test]
    fn test_weights_in_range() {
        let graph = GraphGenerator::new(
            GeneratorOptions::default()
                .vertices(40)
                .probability(0.5)
                .weights(2.0, 3.0),
        )
        .generate(|i| i)
        .unwrap();

        for edge in graph.edges() {
            let weight = edge.weight().unwrap();
            assert!((2.0..3.0).contains(&weight));
        }
    }

    #[test]
    fn test_invalid_options() {
        let result =
            GraphGenerator::new(GeneratorOptions::default().probability(1.5)).generate(|i| i);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));

        let result =
            GraphGenerator::new(GeneratorOptions::default().weights(5.0, 1.0)).generate(|i| i);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_directed_only_forward_pairs() {
        let graph = GraphGenerator::new(
            GeneratorOptions::default()
                .vertices(12)
                .probability(0.6)
                .directed(true),
        )
        .generate(|i| i)
        .unwrap();

        assert!(graph.is_directed());
        assert!(graph.edges().all(|edge| edge.source() < edge.destination()));
    }
}
