//! Planner configuration.

use crate::paths::Algorithm;

/// What a journey minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostModel {
    /// Total travel time in minutes.
    #[default]
    TravelTime,
    /// Number of station-to-station hops.
    Stops,
}

/// Configuration parameters for route planning and network analysis.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Treat each connection as one-way (`StationA` to `StationB` only).
    pub directed: bool,

    /// Single-source algorithm to run.
    pub algorithm: Algorithm,

    /// What a journey minimises.
    pub cost: CostModel,

    /// Number of bins for journey-time histograms.
    pub histogram_bins: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(directed: bool, algorithm: Algorithm, cost: CostModel, histogram_bins: usize) -> Self {
        Self {
            directed,
            algorithm,
            cost,
            histogram_bins,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_cost(mut self, cost: CostModel) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            directed: false,
            algorithm: Algorithm::Auto,
            cost: CostModel::TravelTime,
            histogram_bins: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert!(!config.directed);
        assert_eq!(config.algorithm, Algorithm::Auto);
        assert_eq!(config.cost, CostModel::TravelTime);
        assert_eq!(config.histogram_bins, 30);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(true, Algorithm::BellmanFord, CostModel::Stops, 12);

        assert!(config.directed);
        assert_eq!(config.algorithm, Algorithm::BellmanFord);
        assert_eq!(config.cost, CostModel::Stops);
        assert_eq!(config.histogram_bins, 12);
    }

    #[test]
    fn builder_methods() {
        let config = PlannerConfig::default()
            .with_algorithm(Algorithm::Dijkstra)
            .with_cost(CostModel::Stops)
            .with_histogram_bins(5);

        assert_eq!(config.algorithm, Algorithm::Dijkstra);
        assert_eq!(config.cost, CostModel::Stops);
        assert_eq!(config.histogram_bins, 5);
    }
}
