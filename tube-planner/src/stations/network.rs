//! Building a graph from connection records.

use tracing::{debug, trace};

use crate::network::Graph;

use super::error::LoadError;
use super::index::StationIndex;
use super::record::ConnectionRecord;

/// A station index together with the graph built over it.
#[derive(Debug, Clone)]
pub struct Network {
    stations: StationIndex,
    graph: Graph,
}

impl Network {
    /// Build the network from connection records.
    ///
    /// Stations are the sorted union of both record columns. When several
    /// records join the same pair, the first one wins and the rest are
    /// skipped.
    pub fn build(records: &[ConnectionRecord], directed: bool) -> Result<Self, LoadError> {
        let stations = StationIndex::from_records(records);
        let mut graph = Graph::new(stations.len(), directed, true)?;
        let mut skipped = 0usize;

        for record in records {
            let (Some(a), Some(b)) = (
                stations.index_of(&record.station_a),
                stations.index_of(&record.station_b),
            ) else {
                continue;
            };

            if graph.has_edge(a, b) {
                trace!(
                    station_a = %record.station_a,
                    station_b = %record.station_b,
                    "duplicate connection skipped"
                );
                skipped += 1;
                continue;
            }

            graph
                .insert_edge(a, b, record.travel_time)
                .map_err(|source| LoadError::Connection {
                    station_a: record.station_a.clone(),
                    station_b: record.station_b.clone(),
                    source,
                })?;
        }

        debug!(
            stations = stations.len(),
            edges = graph.edge_count(),
            skipped,
            directed,
            "network built"
        );

        Ok(Self { stations, graph })
    }

    pub fn stations(&self) -> &StationIndex {
        &self.stations
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Station names for a sequence of vertices.
    pub fn names_of<'a>(&'a self, vertices: &'a [usize]) -> impl Iterator<Item = &'a str> + 'a {
        vertices
            .iter()
            .map(|&v| self.stations.name_of(v).unwrap_or("?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::GraphError;

    fn records() -> Vec<ConnectionRecord> {
        vec![
            ConnectionRecord::new("Oval", "Kennington", 2.0),
            ConnectionRecord::new("Kennington", "Elephant & Castle", 2.0),
            ConnectionRecord::new("Kennington", "Oval", 3.0),
        ]
    }

    #[test]
    fn undirected_skips_reverse_duplicates() {
        let network = Network::build(&records(), false).unwrap();
        let oval = network.stations().index_of("Oval").unwrap();
        let kennington = network.stations().index_of("Kennington").unwrap();

        assert_eq!(network.graph().edge_count(), 2);
        assert_eq!(network.graph().weight(kennington, oval), Some(2.0));
    }

    #[test]
    fn directed_keeps_both_directions() {
        let network = Network::build(&records(), true).unwrap();
        let oval = network.stations().index_of("Oval").unwrap();
        let kennington = network.stations().index_of("Kennington").unwrap();

        assert_eq!(network.graph().edge_count(), 3);
        assert_eq!(network.graph().weight(oval, kennington), Some(2.0));
        assert_eq!(network.graph().weight(kennington, oval), Some(3.0));
    }

    #[test]
    fn negative_travel_time_is_rejected() {
        let records = vec![ConnectionRecord::new("Bank", "Monument", -1.0)];

        let err = Network::build(&records, false).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Connection {
                source: GraphError::InvalidWeight(_),
                ..
            }
        ));
    }

    #[test]
    fn names_of_path() {
        let network = Network::build(&records(), false).unwrap();
        let names: Vec<_> = network.names_of(&[2, 1, 0]).collect();
        assert_eq!(names, vec!["Oval", "Kennington", "Elephant & Castle"]);
    }

    #[test]
    fn sample_data_builds() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("sample_connections.json");
        let records = crate::stations::load_records(&path).unwrap();
        assert_eq!(records.len(), 10);

        let network = Network::build(&records, false).unwrap();
        assert_eq!(network.stations().len(), 8);
        // Green Park - Bond Street repeats Bond Street - Green Park
        assert_eq!(network.graph().edge_count(), 9);

        let bond = network.stations().index_of("Bond Street").unwrap();
        let green = network.stations().index_of("Green Park").unwrap();
        assert_eq!(network.graph().weight(green, bond), Some(1.0));
    }

    #[test]
    fn empty_records() {
        let network = Network::build(&[], false).unwrap();
        assert!(network.stations().is_empty());
        assert_eq!(network.graph().vertex_count(), 0);
    }
}
