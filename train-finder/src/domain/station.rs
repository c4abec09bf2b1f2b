//! Station identifier types.

use std::fmt;

/// Smallest station identifier accepted from user input.
pub const MIN_STATION_ID: i64 = 1;

/// Error returned when parsing a station identifier from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStationId {
    /// Nothing was entered
    #[error("station id is empty")]
    Empty,

    /// Input is not a decimal integer
    #[error("station id is not an integer")]
    NotAnInteger,

    /// Integer is below the smallest allowed identifier
    #[error("station id {value} is below the minimum of {min}")]
    BelowMinimum { value: i64, min: i64 },
}

/// A numeric station identifier.
///
/// Identifiers typed by a user go through [`StationId::parse`], which
/// enforces the `>= 1` rule. Identifiers decoded from the dataset are taken
/// as-is with [`StationId::from_raw`]; a record with an out-of-range id can
/// never match a validated query, so it is simply never returned.
///
/// # Examples
///
/// ```
/// use train_finder::domain::StationId;
///
/// let id = StationId::parse("12").unwrap();
/// assert_eq!(id.get(), 12);
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("abc").is_err());
/// assert!(StationId::parse("0").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(i64);

impl StationId {
    /// Parse a station id using the default minimum ([`MIN_STATION_ID`]).
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        Self::parse_with_min(s, MIN_STATION_ID)
    }

    /// Parse a station id, rejecting values below `min`.
    ///
    /// Accepts an optional leading sign. Surrounding whitespace is not
    /// trimmed.
    pub fn parse_with_min(s: &str, min: i64) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId::Empty);
        }

        let value: i64 = s.parse().map_err(|_| InvalidStationId::NotAnInteger)?;
        if value < min {
            return Err(InvalidStationId::BelowMinimum { value, min });
        }

        Ok(Self(value))
    }

    /// Wrap an identifier read from the dataset without range checks.
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
