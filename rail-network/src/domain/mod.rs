//! Domain types for the rail network.
//!
//! This module contains the validated value types the network is built
//! from. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod crs;
mod error;
mod fare;
mod journey;
mod station;

pub use crs::{Crs, InvalidCrs};
pub use error::{FareError, StationError};
pub use fare::fare_price;
pub use journey::Journey;
pub use station::{EARTH_RADIUS_KM, Station};
