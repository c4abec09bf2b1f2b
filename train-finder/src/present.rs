//! Human-readable output for found trains.
//!
//! Each train is printed on one line. Times are expanded into calendar
//! components against the placeholder reference date; only the clock part
//! carries information.
//!
//! A time renders as `Date(0, January, 1, 9, 5, 0, 0, UTC)`: plain month
//! name and location label, no language-specific qualifiers. The line is
//! for people to read and is not meant to be parsed back.

use std::fmt;
use std::io::{self, Write};

use chrono::{Datelike, Timelike};

use crate::domain::{TimeOfDay, Train};

/// Label shown as the time zone of every displayed time.
pub const LOCATION_LABEL: &str = "UTC";

/// Display adapter for a single train line.
///
/// # Examples
///
/// ```
/// use train_finder::dataset::parse_trains;
/// use train_finder::present::TrainLine;
///
/// let trains = parse_trains(r#"[{"TrainID": 1, "DepartureStationID": 1,
///     "ArrivalStationID": 2, "Price": 50, "ArrivalTime": "10:30:00",
///     "DepartureTime": "09:00:00"}]"#).unwrap();
///
/// assert_eq!(
///     TrainLine(&trains[0]).to_string(),
///     "{TrainID: 1, DepartureStationID: 1, ArrivalStationID: 2, Price: 50.00, \
///      ArrivalTime: Date(0, January, 1, 10, 30, 0, 0, UTC), \
///      DepartureTime: Date(0, January, 1, 9, 0, 0, 0, UTC)}"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TrainLine<'a>(pub &'a Train);

impl fmt::Display for TrainLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let train = self.0;
        write!(
            f,
            "{{TrainID: {}, DepartureStationID: {}, ArrivalStationID: {}, Price: {:.2}, \
             ArrivalTime: {}, DepartureTime: {}}}",
            train.id,
            train.departure_station,
            train.arrival_station,
            train.price,
            CalendarTime(&train.arrival_time),
            CalendarTime(&train.departure_time),
        )
    }
}

/// A time of day spelled out as
/// `Date(year, month, day, hour, minute, second, nanosecond, location)`.
struct CalendarTime<'a>(&'a TimeOfDay);

impl fmt::Display for CalendarTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.0.on_reference_date();
        write!(
            f,
            "Date({}, {}, {}, {}, {}, {}, {}, {})",
            dt.year(),
            dt.format("%B"),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.nanosecond(),
            LOCATION_LABEL,
        )
    }
}

/// Format one train as a display line (without trailing newline).
pub fn format_train(train: &Train) -> String {
    TrainLine(train).to_string()
}

/// Write one line per train, in the given order. Writes nothing for an
/// empty slice.
pub fn write_trains<W: Write>(out: &mut W, trains: &[Train]) -> io::Result<()> {
    for train in trains {
        writeln!(out, "{}", TrainLine(train))?;
    }
    Ok(())
}
