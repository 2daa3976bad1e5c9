//! The weighted transit graph.
//!
//! Stations are dense integer indices in `[0, n)`; the name mapping lives
//! with the caller (see [`crate::stations`]).

mod error;
mod graph;

pub use error::GraphError;
pub use graph::{Edge, Graph, MAX_VERTICES};
