//! Conversion from dataset DTOs to domain types.

use tracing::debug;

use crate::domain::{StationId, TimeError, TimeOfDay, Train};

use super::error::DatasetError;
use super::types::TrainRecord;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A time field is not a valid `HH:MM:SS` string
    #[error("invalid {field} {value:?}: {source}")]
    InvalidTime {
        field: &'static str,
        value: String,
        #[source]
        source: TimeError,
    },
}

/// Convert a single dataset record into a [`Train`].
pub fn convert_record(record: TrainRecord) -> Result<Train, ConversionError> {
    let arrival_time = parse_time_field("ArrivalTime", &record.arrival_time)?;
    let departure_time = parse_time_field("DepartureTime", &record.departure_time)?;

    Ok(Train {
        id: record.train_id,
        departure_station: StationId::from_raw(record.departure_station_id),
        arrival_station: StationId::from_raw(record.arrival_station_id),
        price: record.price,
        arrival_time,
        departure_time,
    })
}

/// Decode a whole dataset document.
///
/// Record order is preserved. The first record that fails conversion aborts
/// the load. A `null` document is an empty collection.
///
/// # Examples
///
/// ```
/// use train_finder::dataset::parse_trains;
///
/// let json = r#"[{"TrainID": 1, "DepartureStationID": 1, "ArrivalStationID": 2,
///     "Price": 50.0, "ArrivalTime": "10:30:00", "DepartureTime": "09:00:00"}]"#;
///
/// let trains = parse_trains(json).unwrap();
/// assert_eq!(trains.len(), 1);
/// assert_eq!(trains[0].arrival_time.to_string(), "10:30:00");
/// ```
pub fn parse_trains(json: &str) -> Result<Vec<Train>, DatasetError> {
    let records: Vec<TrainRecord> =
        serde_json::from_str::<Option<Vec<TrainRecord>>>(json)?.unwrap_or_default();

    let mut trains = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let train_id = record.train_id;
        let train = convert_record(record).map_err(|source| DatasetError::InvalidRecord {
            index,
            train_id,
            source,
        })?;
        trains.push(train);
    }

    debug!(count = trains.len(), "decoded train records");
    Ok(trains)
}

fn parse_time_field(field: &'static str, value: &str) -> Result<TimeOfDay, ConversionError> {
    TimeOfDay::parse_hhmmss(value).map_err(|source| ConversionError::InvalidTime {
        field,
        value: value.to_string(),
        source,
    })
}
