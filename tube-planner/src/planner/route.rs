//! Single journeys between two named stations.

use std::fmt;

use tracing::debug;

use crate::config::{CostModel, PlannerConfig};
use crate::network::Graph;
use crate::paths::PathError;
use crate::stations::{Network, UnknownStation};

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// A station name is not in the network
    #[error(transparent)]
    UnknownStation(#[from] UnknownStation),

    /// The shortest-path query failed
    #[error(transparent)]
    Path(#[from] PathError),
}

/// A planned journey between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    /// Stations passed through, both ends included.
    pub stations: Vec<String>,
    /// Total travel time in minutes.
    pub duration: f64,
    /// Number of station-to-station hops.
    pub stops: usize,
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stations.join(" -> "))
    }
}

/// Plans journeys over a network.
pub struct RoutePlanner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
    /// Unit-weight copy of the network, present when minimising stops.
    hops: Option<Graph>,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        let hops = match config.cost {
            CostModel::Stops => Some(network.graph().to_unweighted()),
            CostModel::TravelTime => None,
        };

        Self {
            network,
            config,
            hops,
        }
    }

    /// Plan a journey from `from` to `to`.
    ///
    /// Returns `Ok(None)` if no route connects the two stations.
    pub fn plan(&self, from: &str, to: &str) -> Result<Option<Journey>, PlanError> {
        let stations = self.network.stations();
        let start = stations.require(from)?;
        let end = stations.require(to)?;

        let graph = self.network.graph();
        let search_graph = self.hops.as_ref().unwrap_or(graph);

        let tree = self.config.algorithm.run(search_graph, start)?;
        let Some(path) = tree.path_to(end)? else {
            debug!(from, to, "no route");
            return Ok(None);
        };

        // Stops mode searches unit weights; report real travel time
        let duration = path
            .total_weight(graph)
            .ok_or(PathError::InconsistentTree { target: end })?;

        debug!(from, to, duration, stops = path.hops(), "route planned");

        Ok(Some(Journey {
            stations: self
                .network
                .names_of(path.vertices())
                .map(str::to_string)
                .collect(),
            duration,
            stops: path.hops(),
        }))
    }
}
