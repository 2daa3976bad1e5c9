//! Transit network planner.
//!
//! Finds shortest journeys between stations of a weighted transit graph
//! and checks whether closing a connection strands the stations it joined.

pub mod closure;
pub mod config;
pub mod metrics;
pub mod network;
pub mod paths;
pub mod planner;
pub mod report;
pub mod stations;
