//! Domain error types.
//!
//! These errors represent validation failures when constructing domain
//! values. They are distinct from lookup errors raised by the network.

use super::InvalidCrs;

/// Errors raised while validating a [`Station`](super::Station).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationError {
    /// Station code is not exactly 3 characters
    #[error(transparent)]
    InvalidCrs(#[from] InvalidCrs),

    /// Latitude is outside -90 to 90 degrees (or NaN)
    #[error("latitude {0} is not in -90 to 90 range")]
    LatitudeOutOfRange(f64),

    /// Longitude is outside -180 to 180 degrees (or NaN)
    #[error("longitude {0} is not in -180 to 180 range")]
    LongitudeOutOfRange(f64),

    /// Hub flag is neither 0 nor 1
    #[error("invalid hub flag {0}: expected 0 or 1")]
    InvalidHubFlag(i64),
}

/// Errors raised by fare pricing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// The cross-region flag is a boolean, not a count
    #[error("invalid different-regions flag {0}: expected 0 or 1")]
    InvalidRegionFlag(u32),
}
