//! CSV station list loader.
//!
//! # CSV format
//!
//! One row per station, columns matched by header name (order is free):
//!
//! ```csv
//! name,region,crs,latitude,longitude,hub
//! Abbey Wood,London,ABW,51.4907,0.1203,0
//! Kings Cross,London,KGX,51.5308,-0.1238,1
//! ```
//!
//! The delimiter is configurable; National Rail exports commonly use `;`.
//! Rows are parsed into typed fields first (a non-numeric latitude is a
//! parse error for that row), then validated by [`Station::new`].

mod error;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::Station;
use crate::network::RailNetwork;

pub use error::LoaderError;

#[derive(Debug, Deserialize)]
struct StationRecord {
    name: String,
    region: String,
    crs: String,
    latitude: f64,
    longitude: f64,
    hub: i64,
}

/// Load stations from a CSV file.
pub fn load_stations_csv(path: &Path, delimiter: u8) -> Result<Vec<Station>, LoaderError> {
    let file = File::open(path).map_err(LoaderError::Io)?;
    let stations = load_stations_reader(file, delimiter)?;
    info!(path = %path.display(), stations = stations.len(), "Loaded stations");
    Ok(stations)
}

/// Like [`load_stations_csv`] but accepts any `Read` source.
pub fn load_stations_reader<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<Station>, LoaderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut stations = Vec::new();
    for (i, result) in csv_reader.deserialize::<StationRecord>().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| LoaderError::Csv {
            row,
            message: e.to_string(),
        })?;

        let station = Station::new(
            record.name,
            record.region,
            &record.crs,
            record.latitude,
            record.longitude,
            record.hub,
        )
        .map_err(|source| LoaderError::Station { row, source })?;

        debug!(row, station = %station, "Parsed station");
        stations.push(station);
    }

    Ok(stations)
}

/// Load a CSV file straight into a network.
pub fn load_network_csv(path: &Path, delimiter: u8) -> Result<RailNetwork, LoaderError> {
    let stations = load_stations_csv(path, delimiter)?;
    Ok(RailNetwork::new(stations)?)
}
