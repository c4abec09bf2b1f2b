//! Sort criteria.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::Train;

use super::error::ValidationError;

/// The key trains are ranked by, always ascending.
///
/// # Examples
///
/// ```
/// use train_finder::finder::Criteria;
///
/// let c: Criteria = "arrival-time".parse().unwrap();
/// assert_eq!(c, Criteria::ArrivalTime);
/// assert_eq!(c.as_str(), "arrival-time");
///
/// // Names are exact and case-sensitive
/// assert!("Price".parse::<Criteria>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criteria {
    /// Cheapest first
    Price,
    /// Earliest arrival first
    ArrivalTime,
    /// Earliest departure first
    DepartureTime,
}

impl Criteria {
    /// Every supported criteria, in the order they are listed to users.
    pub const ALL: [Criteria; 3] = [
        Criteria::Price,
        Criteria::ArrivalTime,
        Criteria::DepartureTime,
    ];

    /// Returns the name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criteria::Price => "price",
            Criteria::ArrivalTime => "arrival-time",
            Criteria::DepartureTime => "departure-time",
        }
    }

    /// Compare two trains by this criteria.
    ///
    /// Equal keys compare `Equal`, so a stable sort keeps their input order.
    pub fn compare(&self, a: &Train, b: &Train) -> Ordering {
        match self {
            // Prices decoded from JSON are never NaN
            Criteria::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            Criteria::ArrivalTime => a.arrival_time.cmp(&b.arrival_time),
            Criteria::DepartureTime => a.departure_time.cmp(&b.departure_time),
        }
    }
}

impl FromStr for Criteria {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criteria::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(ValidationError::UnsupportedCriteria)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationId, TimeOfDay};

    fn train(price: f32, dep: &str, arr: &str) -> Train {
        Train {
            id: 0,
            departure_station: StationId::from_raw(1),
            arrival_station: StationId::from_raw(2),
            price,
            arrival_time: TimeOfDay::parse_hhmmss(arr).unwrap(),
            departure_time: TimeOfDay::parse_hhmmss(dep).unwrap(),
        }
    }

    #[test]
    fn parse_supported_names() {
        assert_eq!("price".parse::<Criteria>(), Ok(Criteria::Price));
        assert_eq!("arrival-time".parse::<Criteria>(), Ok(Criteria::ArrivalTime));
        assert_eq!("departure-time".parse::<Criteria>(), Ok(Criteria::DepartureTime));
    }

    #[test]
    fn reject_unsupported_names() {
        for name in ["", "duration", "PRICE", "arrival_time", " price", "price "] {
            assert_eq!(
                name.parse::<Criteria>(),
                Err(ValidationError::UnsupportedCriteria),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_matches_name() {
        for c in Criteria::ALL {
            assert_eq!(c.to_string(), c.as_str());
            assert_eq!(c.as_str().parse::<Criteria>(), Ok(c));
        }
    }

    #[test]
    fn compare_by_each_key() {
        let a = train(10.0, "09:00:00", "12:00:00");
        let b = train(20.0, "08:00:00", "11:00:00");

        assert_eq!(Criteria::Price.compare(&a, &b), Ordering::Less);
        assert_eq!(Criteria::ArrivalTime.compare(&a, &b), Ordering::Greater);
        assert_eq!(Criteria::DepartureTime.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn equal_keys_compare_equal() {
        let a = train(10.0, "09:00:00", "12:00:00");
        let b = train(10.0, "09:00:00", "12:00:00");

        for c in Criteria::ALL {
            assert_eq!(c.compare(&a, &b), Ordering::Equal);
        }
    }
}
