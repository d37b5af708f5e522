//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, Station};

/// Request for a journey between two stations.
#[derive(Debug, Deserialize)]
pub struct JourneyQuery {
    /// Origin station CRS code
    pub from: String,

    /// Destination station CRS code
    pub to: String,
}

/// Request for a journey fare.
#[derive(Debug, Deserialize)]
pub struct FareQuery {
    /// Origin station CRS code
    pub from: String,

    /// Destination station CRS code
    pub to: String,

    /// Include the printable journey summary
    #[serde(default)]
    pub summary: bool,
}

/// A station in responses.
#[derive(Debug, Serialize, PartialEq)]
pub struct StationResult {
    pub crs: String,
    pub name: String,
    pub region: String,
    pub lat: f64,
    pub lon: f64,
    pub hub: bool,
}

/// Response listing regions.
#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    /// Distinct region names, sorted
    pub regions: Vec<String>,

    /// Total number of stations
    pub n_stations: usize,
}

/// Response listing hubs of every region that has any.
#[derive(Debug, Serialize)]
pub struct HubsResponse {
    pub hubs: BTreeMap<String, Vec<StationResult>>,
}

/// Response listing hubs of one region.
#[derive(Debug, Serialize)]
pub struct RegionHubsResponse {
    pub region: String,
    pub hubs: Vec<StationResult>,
}

/// A planned journey.
#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    /// Stations in travel order
    pub stations: Vec<StationResult>,

    /// Route rendered as text, e.g. `KDY -> Aberdeen (ABD) -> ABW`
    pub route: String,
}

/// A priced journey.
#[derive(Debug, Serialize)]
pub struct FareResponse {
    /// Total fare in pounds
    pub fare: f64,

    /// Multi-line summary, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Fares from every reachable station to one destination.
#[derive(Debug, Serialize)]
pub struct FaresToResponse {
    pub destination: String,
    pub fares: Vec<f64>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            crs: station.crs().to_string(),
            name: station.name().to_string(),
            region: station.region().to_string(),
            lat: station.lat(),
            lon: station.lon(),
            hub: station.is_hub(),
        }
    }
}

impl JourneyResponse {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey<'_>) -> Self {
        Self {
            stations: journey
                .stations()
                .iter()
                .map(|s| StationResult::from_station(s))
                .collect(),
            route: journey.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_result_from_station() {
        let station = Station::new("Kings Cross", "London", "KGX", 51.5308, -0.1238, 1).unwrap();
        let result = StationResult::from_station(&station);

        assert_eq!(
            result,
            StationResult {
                crs: "KGX".into(),
                name: "Kings Cross".into(),
                region: "London".into(),
                lat: 51.5308,
                lon: -0.1238,
                hub: true,
            }
        );
    }

    #[test]
    fn fare_response_omits_missing_summary() {
        let json = serde_json::to_value(FareResponse {
            fare: 2.5,
            summary: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "fare": 2.5 }));
    }

    #[test]
    fn fare_query_summary_defaults_off() {
        let query: FareQuery = serde_json::from_str(r#"{"from": "KDY", "to": "ABW"}"#).unwrap();
        assert!(!query.summary);
    }
}
