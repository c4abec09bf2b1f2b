//! Lookup configuration.

use crate::domain::MIN_STATION_ID;

/// Configuration parameters for train lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Maximum number of trains to return.
    /// Matches are cut to this many, in dataset order, before sorting.
    pub max_results: usize,

    /// Smallest station id accepted from user input.
    pub min_station_id: i64,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize, min_station_id: i64) -> Self {
        Self {
            max_results,
            min_station_id,
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            min_station_id: MIN_STATION_ID,
        }
    }
}
