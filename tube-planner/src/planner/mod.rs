//! Route planning between named stations.
//!
//! Resolves station names against a [`Network`](crate::stations::Network),
//! runs the configured shortest-path algorithm and reads the result back
//! as a named [`Journey`].

mod route;

pub use route::{Journey, PlanError, RoutePlanner};
