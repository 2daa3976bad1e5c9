//! Shortest-path error types.

use crate::network::GraphError;

/// Errors from shortest-path queries and path reconstruction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// Source or target rejected by the graph
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Dijkstra was asked to run on a graph carrying a negative edge
    #[error("graph has negative edge weights; use Bellman-Ford")]
    NegativeWeight,

    /// A cycle of negative total weight is reachable from the source
    #[error("negative cycle reachable from vertex {start}")]
    NegativeCycle { start: usize },

    /// Following predecessors from the target never terminated
    #[error("predecessor chain from vertex {target} contains a cycle")]
    PredecessorCycle { target: usize },

    /// Distance and predecessor tables disagree about reachability
    #[error("distance and predecessor tables disagree on vertex {target}")]
    InconsistentTree { target: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PathError::NegativeCycle { start: 0 };
        assert_eq!(err.to_string(), "negative cycle reachable from vertex 0");

        let err = PathError::PredecessorCycle { target: 4 };
        assert_eq!(
            err.to_string(),
            "predecessor chain from vertex 4 contains a cycle"
        );

        let err: PathError = GraphError::OutOfRange { vertex: 3, size: 2 }.into();
        assert_eq!(err.to_string(), "vertex 3 out of range for graph of 2 vertices");
    }
}
