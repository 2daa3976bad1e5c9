//! Station name lookup.

use std::collections::{BTreeSet, HashMap};

use super::error::UnknownStation;
use super::record::ConnectionRecord;

/// Bijective station name ↔ vertex index table.
///
/// Indices are assigned in sorted name order, so the same set of stations
/// always gets the same indices.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl StationIndex {
    /// Build an index over the distinct names given.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let indices = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Self { names, indices }
    }

    /// Build an index over every station named on either side of a record.
    pub fn from_records(records: &[ConnectionRecord]) -> Self {
        Self::from_names(
            records
                .iter()
                .flat_map(|r| [r.station_a.as_str(), r.station_b.as_str()]),
        )
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Like [`index_of`](Self::index_of), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<usize, UnknownStation> {
        self.index_of(name).ok_or_else(|| UnknownStation {
            name: name.to_string(),
        })
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All names, indexed by vertex.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
