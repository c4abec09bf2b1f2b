//! Train timetable record.

use super::{StationId, TimeOfDay};

/// One timetabled train between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    /// Identifier from the dataset.
    pub id: i64,

    /// Station the train departs from.
    pub departure_station: StationId,

    /// Station the train arrives at.
    pub arrival_station: StationId,

    /// Ticket price. Non-negative by convention, never checked.
    ///
    /// Single precision: ranking and the two-decimal display both work on
    /// the narrowed value.
    pub price: f32,

    /// Time of arrival at `arrival_station`.
    pub arrival_time: TimeOfDay,

    /// Time of departure from `departure_station`.
    pub departure_time: TimeOfDay,
}

impl Train {
    /// Returns true if this train runs from `departure` to `arrival`.
    pub fn connects(&self, departure: StationId, arrival: StationId) -> bool {
        self.departure_station == departure && self.arrival_station == arrival
    }
}
