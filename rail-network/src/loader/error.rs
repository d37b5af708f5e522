//! Loader error types.

use crate::domain::StationError;
use crate::network::NetworkError;

/// Errors that can occur while loading a station list.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The file could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// A row could not be parsed into typed fields
    #[error("row {row}: {message}")]
    Csv { row: usize, message: String },

    /// A row parsed but failed station validation
    #[error("row {row}: {source}")]
    Station { row: usize, source: StationError },

    /// The stations could not form a network
    #[error(transparent)]
    Network(#[from] NetworkError),
}
