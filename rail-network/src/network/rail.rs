//! The station collection and its routing queries.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::trace;

use crate::domain::{Crs, Journey, Station};

use super::builder::RailNetworkBuilder;
use super::error::NetworkError;

/// A set of stations with unique CRS codes.
///
/// Stations are kept in insertion order; that order decides ties in
/// [`closest_hub`](Self::closest_hub). Region and hub views are derived on
/// each call rather than cached. The network is immutable: to drop a
/// station, build a new one with [`RailNetworkBuilder::without`].
#[derive(Debug, Clone)]
pub struct RailNetwork {
    stations: Vec<Station>,
    index: HashMap<Crs, usize>,
}

/// A planned journey together with the hubs it was planned from.
///
/// Fare pricing needs both closest hubs even when they are not on the
/// route, so they are kept alongside the journey instead of recomputed.
#[derive(Debug, Clone)]
pub(crate) struct Plan<'a> {
    pub journey: Journey<'a>,
    pub start_hub: &'a Station,
    pub dest_hub: &'a Station,
}

impl RailNetwork {
    /// Build a network from stations.
    ///
    /// Fails on the first duplicated CRS code; no partial network is built.
    pub fn new(stations: impl IntoIterator<Item = Station>) -> Result<Self, NetworkError> {
        let stations: Vec<Station> = stations.into_iter().collect();
        let mut index = HashMap::with_capacity(stations.len());

        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.crs(), i).is_some() {
                return Err(NetworkError::DuplicateCrs(station.crs()));
            }
        }

        Ok(Self { stations, index })
    }

    /// Start building a network station by station.
    pub fn builder() -> RailNetworkBuilder {
        RailNetworkBuilder::new()
    }

    /// Number of stations in the network.
    pub fn n_stations(&self) -> usize {
        self.stations.len()
    }

    /// All stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Look up a station by code.
    pub fn get(&self, crs: &Crs) -> Option<&Station> {
        self.index.get(crs).map(|&i| &self.stations[i])
    }

    /// Look up a station by its code as a string.
    pub fn station(&self, crs: &str) -> Result<&Station, NetworkError> {
        let crs = Crs::parse(crs)?;
        self.get(&crs).ok_or(NetworkError::UnknownStation(crs))
    }

    /// Distinct region names.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.stations.iter().map(Station::region).collect()
    }

    /// Stations grouped by region, each group in insertion order.
    pub fn stations_by_region(&self) -> BTreeMap<&str, Vec<&Station>> {
        let mut by_region: BTreeMap<&str, Vec<&Station>> = BTreeMap::new();
        for station in &self.stations {
            by_region.entry(station.region()).or_default().push(station);
        }
        by_region
    }

    /// Hub stations grouped by region.
    ///
    /// Regions without any hub are absent from the map.
    pub fn hub_stations_by_region(&self) -> BTreeMap<&str, Vec<&Station>> {
        let mut hubs: BTreeMap<&str, Vec<&Station>> = BTreeMap::new();
        for station in self.stations.iter().filter(|s| s.is_hub()) {
            hubs.entry(station.region()).or_default().push(station);
        }
        hubs
    }

    /// Hub stations in one region, in insertion order.
    ///
    /// Fails with [`NetworkError::RegionNotFound`] if the region is not in
    /// the network or has no hubs.
    pub fn hub_stations(&self, region: &str) -> Result<Vec<&Station>, NetworkError> {
        let hubs: Vec<&Station> = self
            .stations
            .iter()
            .filter(|s| s.is_hub() && s.region() == region)
            .collect();

        if hubs.is_empty() {
            return Err(NetworkError::RegionNotFound(region.to_string()));
        }
        Ok(hubs)
    }

    /// The hub in `station`'s region nearest to it.
    ///
    /// A hub is its own closest hub. Equidistant hubs resolve to the one
    /// added to the network first.
    pub fn closest_hub(&self, station: &Station) -> Result<&Station, NetworkError> {
        let hubs = self.hub_stations(station.region())?;

        let mut best = hubs[0];
        let mut best_distance = best.distance_to(station);
        for &hub in &hubs[1..] {
            let distance = hub.distance_to(station);
            if distance < best_distance {
                best = hub;
                best_distance = distance;
            }
        }

        trace!(
            station = %station.crs(),
            hub = %best.crs(),
            distance_km = best_distance,
            "closest hub"
        );
        Ok(best)
    }

    /// Plan the route between two stations given by code.
    ///
    /// A journey leaving its region goes out through the origin's closest
    /// hub (unless the origin is that hub) and in through the destination's
    /// closest hub (unless the destination is that hub). Journeys within a
    /// region go direct. The destination is always appended, so planning a
    /// station to itself yields a two-entry journey.
    pub fn journey_planner(&self, start: &str, dest: &str) -> Result<Journey<'_>, NetworkError> {
        Ok(self.plan(start, dest)?.journey)
    }

    pub(crate) fn plan(&self, start: &str, dest: &str) -> Result<Plan<'_>, NetworkError> {
        let start_crs = Crs::parse(start)?;
        let dest_crs = Crs::parse(dest)?;

        let start = self
            .get(&start_crs)
            .ok_or(NetworkError::UnknownStation(start_crs))?;
        let dest = self
            .get(&dest_crs)
            .ok_or(NetworkError::UnknownStation(dest_crs))?;

        let start_hub = self.closest_hub(start)?;
        let dest_hub = self.closest_hub(dest)?;

        let mut stations = vec![start];
        if start_hub != start && start_hub.region() != dest_hub.region() {
            stations.push(start_hub);
        }
        if dest_hub != dest && dest_hub.region() != start_hub.region() {
            stations.push(dest_hub);
        }
        stations.push(dest);

        Ok(Plan {
            journey: Journey::from_stations(stations),
            start_hub,
            dest_hub,
        })
    }
}
