//! Time-of-day handling for timetable records.
//!
//! The dataset carries departure and arrival times as `"HH:MM:SS"` strings
//! with no date. [`TimeOfDay`] holds such a value; when a calendar-style
//! rendering is needed it is pinned to a fixed placeholder date (see
//! [`reference_date`]), which carries no meaning of its own.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// The placeholder date every [`TimeOfDay`] is displayed against:
/// year 0, January 1.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(0, 1, 1).expect("year 0 January 1 is a valid date")
}

/// A clock time with no associated date.
///
/// Ordering is chronological within a single day.
///
/// # Examples
///
/// ```
/// use train_finder::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmmss("09:05:30").unwrap();
/// assert_eq!(t.hour(), 9);
/// assert_eq!(t.minute(), 5);
/// assert_eq!(t.second(), 30);
/// assert_eq!(t.to_string(), "09:05:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build a time from its components.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or_else(|| TimeError::new("time component out of range"))
    }

    /// Parse a time from `"HH:MM:SS"` format (24-hour, zero-padded).
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmmss("00:00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmmss("23:59:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmmss("9:00:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("09:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("24:00:00").is_err());
    /// ```
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Self::from_hms(hour, minute, second)
    }

    /// Returns the underlying clock time.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the sub-second part in nanoseconds. Always 0 for parsed values.
    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    /// Pins this time to the placeholder [`reference_date`].
    pub fn on_reference_date(&self) -> NaiveDateTime {
        reference_date().and_time(self.0)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
