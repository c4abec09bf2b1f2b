//! Dataset record DTOs.
//!
//! These map one-to-one onto the objects in the dataset file. Times are
//! kept as raw strings here and parsed during conversion.

use serde::Deserialize;

/// One train as it appears in the dataset file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainRecord {
    #[serde(rename = "TrainID")]
    pub train_id: i64,

    #[serde(rename = "DepartureStationID")]
    pub departure_station_id: i64,

    #[serde(rename = "ArrivalStationID")]
    pub arrival_station_id: i64,

    /// Narrowed to `f32` on decode.
    pub price: f32,

    /// Arrival time as `"HH:MM:SS"`.
    pub arrival_time: String,

    /// Departure time as `"HH:MM:SS"`.
    pub departure_time: String,
}
