//! Graph error types.
//!
//! These errors are caller mistakes: they abort the single operation that
//! raised them and never leave the graph half-modified.

/// Structural errors raised by [`Graph`](super::Graph) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Requested vertex count cannot be represented
    #[error("invalid graph size {0}: at most {max} vertices are supported", max = super::MAX_VERTICES)]
    InvalidSize(usize),

    /// Vertex index outside `[0, n)`
    #[error("vertex {vertex} out of range for graph of {size} vertices")]
    OutOfRange { vertex: usize, size: usize },

    /// Weight is negative where disallowed, or not a finite number
    #[error("invalid weight {0}")]
    InvalidWeight(f64),

    /// No edge exists on the given ordered pair
    #[error("no edge from {0} to {1}")]
    EdgeNotFound(usize, usize),

    /// An edge already exists on the given ordered pair
    #[error("edge from {0} to {1} already exists")]
    DuplicateEdge(usize, usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::OutOfRange { vertex: 7, size: 5 };
        assert_eq!(err.to_string(), "vertex 7 out of range for graph of 5 vertices");

        let err = GraphError::InvalidWeight(-2.5);
        assert_eq!(err.to_string(), "invalid weight -2.5");

        let err = GraphError::EdgeNotFound(1, 2);
        assert_eq!(err.to_string(), "no edge from 1 to 2");

        let err = GraphError::DuplicateEdge(3, 0);
        assert_eq!(err.to_string(), "edge from 3 to 0 already exists");
    }
}
