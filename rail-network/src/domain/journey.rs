//! Journey types.
//!
//! A `Journey` is the ordered list of stations a trip passes through:
//! the origin, up to two interchange hubs, and the destination.

use std::fmt;

use super::Station;

/// An ordered route between two stations.
///
/// Always starts at the origin and ends at the destination, with 0, 1 or 2
/// hubs in between. Borrows its stations from the network that planned it.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey<'a> {
    stations: Vec<&'a Station>,
}

impl<'a> Journey<'a> {
    /// Build a journey from its stations in travel order.
    pub(crate) fn from_stations(stations: Vec<&'a Station>) -> Self {
        debug_assert!(stations.len() >= 2, "a journey has an origin and a destination");
        Self { stations }
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[&'a Station] {
        &self.stations
    }

    /// Number of stations on the route (2 to 4).
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn origin(&self) -> &'a Station {
        self.stations[0]
    }

    pub fn destination(&self) -> &'a Station {
        self.stations[self.stations.len() - 1]
    }

    /// Interchange stations between origin and destination.
    pub fn interchanges(&self) -> &[&'a Station] {
        &self.stations[1..self.stations.len() - 1]
    }

    /// Consecutive station pairs, one per leg.
    pub fn legs(&self) -> impl Iterator<Item = (&'a Station, &'a Station)> + '_ {
        self.stations.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Renders the route as `ABD -> Kings Cross (KGX) -> ABW`: the endpoints by
/// code, interchanges by name and code.
impl fmt::Display for Journey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin().crs())?;
        for hub in self.interchanges() {
            write!(f, " -> {} ({})", hub.name(), hub.crs())?;
        }
        write!(f, " -> {}", self.destination().crs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, crs: &str, hub: bool) -> Station {
        Station::new(name, "R", crs, 51.0, 0.0, hub).unwrap()
    }

    #[test]
    fn direct_journey() {
        let a = station("Alpha", "AAA", false);
        let b = station("Bravo", "BBB", false);
        let journey = Journey::from_stations(vec![&a, &b]);

        assert_eq!(journey.len(), 2);
        assert!(!journey.is_empty());
        assert_eq!(journey.origin(), &a);
        assert_eq!(journey.destination(), &b);
        assert!(journey.interchanges().is_empty());
        assert_eq!(journey.legs().count(), 1);
        assert_eq!(journey.to_string(), "AAA -> BBB");
    }

    #[test]
    fn hub_to_hub_journey() {
        let a = station("Alpha", "AAA", false);
        let h1 = station("Hub One", "HB1", true);
        let h2 = station("Hub Two", "HB2", true);
        let b = station("Bravo", "BBB", false);
        let journey = Journey::from_stations(vec![&a, &h1, &h2, &b]);

        assert_eq!(journey.len(), 4);
        assert_eq!(journey.interchanges(), &[&h1, &h2]);

        let legs: Vec<_> = journey
            .legs()
            .map(|(from, to)| (from.crs().to_string(), to.crs().to_string()))
            .collect();
        assert_eq!(
            legs,
            vec![
                ("AAA".to_string(), "HB1".to_string()),
                ("HB1".to_string(), "HB2".to_string()),
                ("HB2".to_string(), "BBB".to_string()),
            ]
        );
        assert_eq!(
            journey.to_string(),
            "AAA -> Hub One (HB1) -> Hub Two (HB2) -> BBB"
        );
    }

    #[test]
    fn same_station_journey() {
        let a = station("Alpha", "AAA", false);
        let journey = Journey::from_stations(vec![&a, &a]);
        assert_eq!(journey.origin(), journey.destination());
        assert_eq!(journey.to_string(), "AAA -> AAA");
    }
}
