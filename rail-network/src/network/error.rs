//! Network error types.

use crate::domain::{Crs, FareError, InvalidCrs};

/// Errors raised while building or querying a [`RailNetwork`](super::RailNetwork).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// Two stations share a CRS code
    #[error("duplicate CRS code {0}: no two stations can share an identifier")]
    DuplicateCrs(Crs),

    /// Region is absent from the network or has no hub stations
    #[error("region not found: {0:?} has no hub stations")]
    RegionNotFound(String),

    /// No station with this code is in the network
    #[error("unknown station: {0}")]
    UnknownStation(Crs),

    /// A code passed to a query is not 3 characters
    #[error(transparent)]
    InvalidCrs(#[from] InvalidCrs),

    /// Fare pricing rejected its inputs
    #[error(transparent)]
    Fare(#[from] FareError),
}
