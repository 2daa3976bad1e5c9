//! Station names and connection data.
//!
//! This is the caller side of the graph core: it turns named connection
//! records into a [`Graph`](crate::network::Graph) plus the name ↔ index
//! table needed to read results back.

mod error;
mod index;
mod network;
mod record;

pub use error::{LoadError, UnknownStation};
pub use index::StationIndex;
pub use network::Network;
pub use record::{ConnectionRecord, load_records};
