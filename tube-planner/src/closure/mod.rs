//! Closure feasibility.
//!
//! A closure removes one segment (or a whole stretch of line) from a copy
//! of the network and asks whether the stations it joined can still reach
//! each other some other way.

mod analyzer;
mod reachability;

pub use analyzer::{ChainReport, ClosureAnalyzer, ClosureReport, PairOutcome, analyze_closure};
pub use reachability::{Reachable, reachable_from};
