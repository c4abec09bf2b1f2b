//! Domain types for the train finder.
//!
//! These are the validated values the rest of the crate works with. Parsing
//! happens once, at the edge (dataset decoding or user input), so code that
//! receives these types can trust them.

mod station;
mod time;
mod train;

pub use station::{InvalidStationId, MIN_STATION_ID, StationId};
pub use time::{TimeError, TimeOfDay, reference_date};
pub use train::Train;
