//! Train finder.
//!
//! Looks up the best trains between two stations in a static JSON
//! timetable, ranked by price, arrival time or departure time.
//!
//! The core is [`finder::find_trains`], a pure function over a borrowed
//! collection. [`finder::TrainFinder`] pairs it with a
//! [`dataset::TrainSource`] that reloads the collection on every lookup.

pub mod dataset;
pub mod domain;
pub mod error;
pub mod finder;
pub mod present;
pub mod prompt;

pub use error::Error;
