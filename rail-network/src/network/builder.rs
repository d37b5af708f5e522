//! Builder for rail networks.

use crate::domain::{Crs, Station};

use super::error::NetworkError;
use super::rail::RailNetwork;

/// Builder for creating rail networks.
///
/// Also the way to derive a changed network from an existing one, such as
/// the same network with a station closed: the source network is cloned,
/// never modified.
///
/// # Example
///
/// ```
/// use rail_network::domain::{Crs, Station};
/// use rail_network::network::RailNetworkBuilder;
///
/// let network = RailNetworkBuilder::new()
///     .station(Station::new("Kings Cross", "London", "KGX", 51.5308, -0.1238, true).unwrap())
///     .station(Station::new("Abbey Wood", "London", "ABW", 51.4907, 0.1203, false).unwrap())
///     .build()
///     .unwrap();
///
/// let closed = RailNetworkBuilder::from_network(&network)
///     .without(Crs::parse("ABW").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(network.n_stations(), 2);
/// assert_eq!(closed.n_stations(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RailNetworkBuilder {
    stations: Vec<Station>,
}

impl RailNetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of every station in `network`.
    pub fn from_network(network: &RailNetwork) -> Self {
        Self {
            stations: network.stations().cloned().collect(),
        }
    }

    /// Add a station.
    pub fn station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    /// Add several stations.
    pub fn stations(mut self, stations: impl IntoIterator<Item = Station>) -> Self {
        self.stations.extend(stations);
        self
    }

    /// Drop every station with this code.
    pub fn without(mut self, crs: Crs) -> Self {
        self.stations.retain(|s| s.crs() != crs);
        self
    }

    /// Build the network, checking codes are unique.
    pub fn build(self) -> Result<RailNetwork, NetworkError> {
        RailNetwork::new(self.stations)
    }
}
