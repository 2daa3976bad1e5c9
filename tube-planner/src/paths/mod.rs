//! Single-source shortest paths.
//!
//! Both algorithms return the same typed result, a [`ShortestPaths`] tree
//! holding the distance and predecessor tables, so callers never inspect
//! the shape of a result to decide how to read it. An unreachable target
//! is a normal outcome (`None`), not an error.

mod algorithm;
mod bellman_ford;
mod dijkstra;
mod error;
mod tree;


pub use algorithm::Algorithm;
pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use error::PathError;
pub use tree::{Path, ShortestPaths, reconstruct};
