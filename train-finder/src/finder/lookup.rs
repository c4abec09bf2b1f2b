//! Source-backed train lookup.

use tracing::debug;

use crate::dataset::TrainSource;
use crate::domain::Train;
use crate::error::Error;

use super::config::FinderConfig;
use super::search::{select, validate};

/// Runs lookups against a [`TrainSource`].
///
/// The collection is loaded afresh for every lookup; nothing is cached
/// between calls.
///
/// # Examples
///
/// ```
/// use train_finder::dataset::{StaticSource, parse_trains};
/// use train_finder::finder::{FinderConfig, TrainFinder};
///
/// let trains = parse_trains(r#"[
///     {"TrainID": 9, "DepartureStationID": 4, "ArrivalStationID": 5,
///      "Price": 12.0, "ArrivalTime": "18:00:00", "DepartureTime": "17:10:00"}
/// ]"#).unwrap();
///
/// let finder = TrainFinder::new(StaticSource::new(trains), FinderConfig::default());
/// let found = finder.lookup("4", "5", "arrival-time").unwrap();
/// assert_eq!(found[0].id, 9);
///
/// let err = finder.lookup("4", "5", "duration").unwrap_err();
/// assert!(err.is_validation());
/// ```
#[derive(Debug, Clone)]
pub struct TrainFinder<S> {
    source: S,
    config: FinderConfig,
}

impl<S: TrainSource> TrainFinder<S> {
    /// Create a finder over the given source.
    pub fn new(source: S, config: FinderConfig) -> Self {
        Self { source, config }
    }

    /// Load the collection, validate the input and return the best matches.
    ///
    /// The dataset is loaded before the input is checked, so a broken
    /// dataset is reported even when the input is also invalid.
    pub fn lookup(
        &self,
        departure: &str,
        arrival: &str,
        criteria: &str,
    ) -> Result<Vec<Train>, Error> {
        let trains = self.source.load()?;
        debug!(count = trains.len(), "loaded trains for lookup");

        let query = validate(departure, arrival, criteria, &self.config)?;
        Ok(select(&query, &trains, &self.config))
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the lookup configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }
}
