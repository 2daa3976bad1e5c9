//! Station data error types.

use std::path::PathBuf;

use crate::network::GraphError;

/// Errors that can occur while loading connection data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the data file failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The data file is not a valid list of connections
    #[error("invalid connection data: {0}")]
    Json(#[from] serde_json::Error),

    /// The graph could not be created
    #[error("invalid network: {0}")]
    Network(#[from] GraphError),

    /// A single connection was rejected by the graph
    #[error("invalid connection {station_a} - {station_b}: {source}")]
    Connection {
        station_a: String,
        station_b: String,
        source: GraphError,
    },
}

/// Error returned when a station name is not in the index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {name}")]
pub struct UnknownStation {
    pub name: String,
}
