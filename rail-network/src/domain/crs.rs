//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code {code:?}: must be exactly 3 characters")]
pub struct InvalidCrs {
    code: String,
}

impl InvalidCrs {
    /// The rejected input.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// A 3-character CRS (Computer Reservation System) station code.
///
/// Codes are case-sensitive: `KGX` and `kgx` are different stations.
/// Any `Crs` value has exactly 3 characters by construction.
///
/// # Examples
///
/// ```
/// use rail_network::domain::Crs;
///
/// let kgx = Crs::parse("KGX").unwrap();
/// assert_eq!(kgx.to_string(), "KGX");
///
/// // Case is preserved, not normalised
/// assert_ne!(Crs::parse("kgx").unwrap(), kgx);
///
/// // Wrong length is rejected
/// assert!(Crs::parse("KG").is_err());
/// assert!(Crs::parse("KGXX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Crs([char; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// The input must be exactly 3 characters (not bytes).
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), Some(c), None) => Ok(Crs([a, b, c])),
            _ => Err(InvalidCrs {
                code: s.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({self})")
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl serde::Serialize for Crs {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
