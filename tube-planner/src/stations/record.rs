//! Connection records and the data file they are loaded from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// One row of connection data: two stations and the travel time between them.
///
/// Field names follow the source columns (`StationA`, `StationB`, `Time`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    #[serde(rename = "StationA")]
    pub station_a: String,
    #[serde(rename = "StationB")]
    pub station_b: String,
    /// Travel time in minutes.
    #[serde(rename = "Time")]
    pub travel_time: f64,
}

impl ConnectionRecord {
    pub fn new(station_a: impl Into<String>, station_b: impl Into<String>, travel_time: f64) -> Self {
        Self {
            station_a: station_a.into(),
            station_b: station_b.into(),
            travel_time,
        }
    }
}

/// Load connection records from a JSON array.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ConnectionRecord>, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&contents)?)
}
