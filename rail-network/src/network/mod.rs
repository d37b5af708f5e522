//! The rail network: station lookup, hub search, journey planning and fares.
//!
//! Journeys within a region go direct. Journeys between regions route out
//! through the origin's closest hub and in through the destination's
//! closest hub, and each leg is priced with [`fare_price`](crate::domain::fare_price).

mod builder;
mod error;
mod fare;
mod rail;


pub use builder::RailNetworkBuilder;
pub use error::NetworkError;
pub use fare::FareSummary;
pub use rail::RailNetwork;
