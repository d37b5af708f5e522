//! Station records and great-circle distance.

use std::fmt;

use super::{Crs, StationError};

/// Mean Earth radius used for distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated station in the rail network.
///
/// Stations are immutable once constructed. Equality compares every field,
/// so two separately constructed stations with the same data are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    region: String,
    crs: Crs,
    lat: f64,
    lon: f64,
    hub: bool,
}

impl Station {
    /// Create a station, validating its fields.
    ///
    /// The hub flag accepts anything convertible to an integer (`bool`,
    /// `u8`, `i32`, ...) and must be 0 or 1. Checks run in order: code
    /// length, latitude range, longitude range, hub flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_network::domain::Station;
    ///
    /// let kgx = Station::new("Kings Cross", "London", "KGX", 51.5308, -0.1238, true).unwrap();
    /// assert!(kgx.is_hub());
    ///
    /// assert!(Station::new("Nowhere", "London", "NWH", 95.0, 0.0, 0).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        crs: &str,
        lat: f64,
        lon: f64,
        hub: impl Into<i64>,
    ) -> Result<Self, StationError> {
        let crs = Crs::parse(crs)?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(StationError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(StationError::LongitudeOutOfRange(lon));
        }

        let hub = match hub.into() {
            0 => false,
            1 => true,
            other => return Err(StationError::InvalidHubFlag(other)),
        };

        Ok(Self {
            name: name.into(),
            region: region.into(),
            crs,
            lat,
            lon,
            hub,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn is_hub(&self) -> bool {
        self.hub
    }

    /// Great-circle distance to another station in kilometres (haversine).
    ///
    /// Returns exactly 0 when `other` equals `self`, regardless of rounding
    /// in the formula.
    pub fn distance_to(&self, other: &Station) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let half_dlat = (other.lat - self.lat).to_radians() / 2.0;
        let half_dlon = (other.lon - self.lon).to_radians() / 2.0;

        let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
        // Rounding can push `a` marginally past 1 for antipodal points
        (2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()).abs()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}-{}/{}", self.crs, self.name, self.region)?;
        if self.hub {
            f.write_str("-hub")?;
        }
        f.write_str(")")
    }
}
