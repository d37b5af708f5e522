//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the station CSV file (required).
pub const STATIONS_CSV_VAR: &str = "RAIL_STATIONS_CSV";

/// Environment variable for the CSV delimiter, a single ASCII character.
pub const DELIMITER_VAR: &str = "RAIL_CSV_DELIMITER";

/// Environment variable for the listen address.
pub const BIND_ADDR_VAR: &str = "RAIL_BIND_ADDR";

/// Errors in server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable is set to something unusable
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Configuration for the fare server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Path to the station list CSV.
    pub stations_path: PathBuf,

    /// Field delimiter of the station list.
    pub delimiter: u8,

    /// Address to listen on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Create a configuration with default delimiter and address.
    pub fn new(stations_path: impl Into<PathBuf>) -> Self {
        Self {
            stations_path: stations_path.into(),
            delimiter: b',',
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }

    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = lookup(STATIONS_CSV_VAR)
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::Missing(STATIONS_CSV_VAR))?;
        let mut config = Self::new(path);

        if let Some(delimiter) = lookup(DELIMITER_VAR) {
            config.delimiter = parse_delimiter(&delimiter)?;
        }

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = addr.parse().map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                message: format!("{addr:?}: {e}"),
            })?;
        }

        Ok(config)
    }
}

fn parse_delimiter(s: &str) -> Result<u8, ConfigError> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ConfigError::Invalid {
            var: DELIMITER_VAR,
            message: format!("{s:?} is not a single ASCII character"),
        }),
    }
}
