//! Journey fares.
//!
//! A journey is priced leg by leg with [`fare_price`]. The hub counts used
//! for each leg come from the region the leg is heading into.

use std::fmt;

use tracing::{debug, trace};

use crate::domain::{Journey, Station, fare_price};

use super::error::NetworkError;
use super::rail::{Plan, RailNetwork};

/// A priced journey, rendered for display by its `Display` impl.
///
/// ```text
/// Journey from: Kirkcaldy (KDY) to Abbey Wood (ABW)
/// Route: KDY -> Aberdeen (ABD) -> Kings Cross (KGX) -> ABW
/// Fare: £54.13
/// ```
#[derive(Debug, Clone)]
pub struct FareSummary<'a> {
    pub journey: Journey<'a>,
    pub fare: f64,
}

impl fmt::Display for FareSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.journey.origin();
        let dest = self.journey.destination();
        writeln!(
            f,
            "Journey from: {} ({}) to {} ({})",
            start.name(),
            start.crs(),
            dest.name(),
            dest.crs()
        )?;
        writeln!(f, "Route: {}", self.journey)?;
        write!(f, "Fare: £{:.2}", self.fare)
    }
}

fn different_regions(a: &Station, b: &Station) -> u32 {
    u32::from(a.region() != b.region())
}

impl RailNetwork {
    /// Total fare for the journey between two stations given by code.
    ///
    /// Errors from planning (bad or unknown codes, hubless regions)
    /// propagate unchanged.
    pub fn journey_fare(&self, start: &str, dest: &str) -> Result<f64, NetworkError> {
        let plan = self.plan(start, dest)?;
        self.price(&plan)
    }

    /// Fare for the journey between two stations, with its route.
    pub fn journey_fare_summary(
        &self,
        start: &str,
        dest: &str,
    ) -> Result<FareSummary<'_>, NetworkError> {
        let plan = self.plan(start, dest)?;
        let fare = self.price(&plan)?;
        Ok(FareSummary {
            journey: plan.journey,
            fare,
        })
    }

    /// Fares to `dest` from every other station that can start a journey.
    ///
    /// Origins in a region without hubs are skipped. Failures tied to
    /// `dest` itself (bad code, unknown station, no hub in its region)
    /// are returned as errors.
    pub fn fares_to(&self, dest: &str) -> Result<Vec<f64>, NetworkError> {
        let dest_station = self.station(dest)?;
        self.closest_hub(dest_station)?;

        let served = self.hub_stations_by_region();
        let mut fares = Vec::with_capacity(self.n_stations().saturating_sub(1));

        for origin in self.stations() {
            if origin.crs() == dest_station.crs() {
                continue;
            }
            if !served.contains_key(origin.region()) {
                debug!(
                    origin = %origin.crs(),
                    region = origin.region(),
                    "Skipping origin in region without hubs"
                );
                continue;
            }
            fares.push(self.journey_fare(&origin.crs().to_string(), dest)?);
        }

        Ok(fares)
    }

    fn price(&self, plan: &Plan<'_>) -> Result<f64, NetworkError> {
        let start = plan.journey.origin();
        let dest = plan.journey.destination();
        let dest_hubs = self.hub_stations(dest.region())?.len();

        if plan.journey.len() == 2 {
            let fare = fare_price(
                start.distance_to(dest),
                different_regions(start, dest),
                dest_hubs,
            )?;
            trace!(start = %start.crs(), dest = %dest.crs(), fare, "direct fare");
            return Ok(fare);
        }

        let start_hub = plan.start_hub;
        let mut fare = fare_price(
            start.distance_to(start_hub),
            0,
            self.hub_stations(start_hub.region())?.len(),
        )?;

        if start_hub.region() == dest.region() {
            fare += fare_price(
                start_hub.distance_to(dest),
                different_regions(start_hub, dest),
                dest_hubs,
            )?;
        } else {
            let dest_hub = plan.dest_hub;
            fare += fare_price(start_hub.distance_to(dest_hub), 1, dest_hubs)?;
            fare += fare_price(dest_hub.distance_to(dest), 0, dest_hubs)?;
        }

        trace!(
            start = %start.crs(),
            dest = %dest.crs(),
            legs = plan.journey.len() - 1,
            fare,
            "hub fare"
        );
        Ok(fare)
    }
}
