//! Validate-filter-sort pipeline.
//!
//! Everything here is pure: the train collection is passed in, nothing is
//! read from disk.

use tracing::{debug, trace};

use crate::domain::{InvalidStationId, StationId, Train};

use super::config::FinderConfig;
use super::criteria::Criteria;
use super::error::ValidationError;

/// A lookup request that has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedQuery {
    /// Station the train must depart from.
    pub departure: StationId,

    /// Station the train must arrive at.
    pub arrival: StationId,

    /// Key to rank matches by.
    pub criteria: Criteria,
}

/// Validate raw lookup input.
///
/// Checks run in a fixed order and the first failure wins: departure
/// (empty, then format, then range), arrival (same three), then criteria.
pub fn validate(
    departure: &str,
    arrival: &str,
    criteria: &str,
    config: &FinderConfig,
) -> Result<ValidatedQuery, ValidationError> {
    let departure = StationId::parse_with_min(departure, config.min_station_id).map_err(|e| {
        trace!(input = departure, error = %e, "rejected departure station");
        match e {
            InvalidStationId::Empty => ValidationError::EmptyDepartureStation,
            _ => ValidationError::BadDepartureStationInput,
        }
    })?;

    let arrival = StationId::parse_with_min(arrival, config.min_station_id).map_err(|e| {
        trace!(input = arrival, error = %e, "rejected arrival station");
        match e {
            InvalidStationId::Empty => ValidationError::EmptyArrivalStation,
            _ => ValidationError::BadArrivalStationInput,
        }
    })?;

    let criteria = criteria.parse::<Criteria>().inspect_err(|_| {
        trace!(input = criteria, "rejected criteria");
    })?;

    Ok(ValidatedQuery {
        departure,
        arrival,
        criteria,
    })
}

/// Select and rank the trains matching a validated query.
///
/// Matches are cut to `config.max_results` in dataset order *before* being
/// stable-sorted, so the result always has at most `max_results` entries and
/// ties keep their dataset order.
pub fn select(query: &ValidatedQuery, trains: &[Train], config: &FinderConfig) -> Vec<Train> {
    let mut matches: Vec<Train> = trains
        .iter()
        .filter(|t| t.connects(query.departure, query.arrival))
        .cloned()
        .collect();

    debug!(
        departure = %query.departure,
        arrival = %query.arrival,
        matches = matches.len(),
        "filtered trains"
    );

    if matches.len() > config.max_results {
        debug!(
            kept = config.max_results,
            dropped = matches.len() - config.max_results,
            "truncating matches before sort"
        );
        matches.truncate(config.max_results);
    }

    // sort_by is stable
    matches.sort_by(|a, b| query.criteria.compare(a, b));
    matches
}

/// Find up to three trains from `departure` to `arrival`, best first.
///
/// Uses [`FinderConfig::default`]. No match is not an error: the result is
/// simply empty.
///
/// # Examples
///
/// ```
/// use train_finder::dataset::parse_trains;
/// use train_finder::finder::{ValidationError, find_trains};
///
/// let trains = parse_trains(r#"[
///     {"TrainID": 1, "DepartureStationID": 1, "ArrivalStationID": 2,
///      "Price": 50.0, "ArrivalTime": "10:00:00", "DepartureTime": "09:00:00"},
///     {"TrainID": 2, "DepartureStationID": 1, "ArrivalStationID": 2,
///      "Price": 30.0, "ArrivalTime": "11:00:00", "DepartureTime": "10:00:00"}
/// ]"#).unwrap();
///
/// let found = find_trains("1", "2", "price", &trains).unwrap();
/// let ids: Vec<i64> = found.iter().map(|t| t.id).collect();
/// assert_eq!(ids, vec![2, 1]);
///
/// assert_eq!(
///     find_trains("", "2", "price", &trains),
///     Err(ValidationError::EmptyDepartureStation)
/// );
/// assert!(find_trains("2", "1", "price", &trains).unwrap().is_empty());
/// ```
pub fn find_trains(
    departure: &str,
    arrival: &str,
    criteria: &str,
    trains: &[Train],
) -> Result<Vec<Train>, ValidationError> {
    find_trains_with(departure, arrival, criteria, trains, &FinderConfig::default())
}

/// Like [`find_trains`], with explicit configuration.
pub fn find_trains_with(
    departure: &str,
    arrival: &str,
    criteria: &str,
    trains: &[Train],
    config: &FinderConfig,
) -> Result<Vec<Train>, ValidationError> {
    let query = validate(departure, arrival, criteria, config)?;
    Ok(select(&query, trains, config))
}
