//! Choice of single-source algorithm.

use std::fmt;

use crate::network::Graph;

use super::bellman_ford::bellman_ford;
use super::dijkstra::dijkstra;
use super::error::PathError;
use super::tree::ShortestPaths;

/// Which single-source shortest-path algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    /// Dijkstra unless the graph carries a negative edge.
    #[default]
    Auto,
}

impl Algorithm {
    /// Resolve `Auto` against a concrete graph.
    pub fn resolve(self, graph: &Graph) -> Algorithm {
        match self {
            Algorithm::Auto if graph.has_negative_weights() => Algorithm::BellmanFord,
            Algorithm::Auto => Algorithm::Dijkstra,
            concrete => concrete,
        }
    }

    /// Run the algorithm from `source`.
    pub fn run(self, graph: &Graph, source: usize) -> Result<ShortestPaths, PathError> {
        match self.resolve(graph) {
            Algorithm::BellmanFord => bellman_ford(graph, source),
            _ => dijkstra(graph, source),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("dijkstra"),
            Algorithm::BellmanFord => f.write_str("bellman-ford"),
            Algorithm::Auto => f.write_str("auto"),
        }
    }
}
