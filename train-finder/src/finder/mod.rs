//! Train lookup: validation, filtering and ranking.
//!
//! A lookup answers "which trains run from station A to station B, best
//! first?" for one of three [`Criteria`]. The pipeline is:
//!
//! 1. Validate the raw user input (station ids, criteria name).
//! 2. Keep trains that connect exactly those two stations, in dataset order.
//! 3. Keep only the first `max_results` of those matches.
//! 4. Stable-sort what is left by the criteria, ascending.
//!
//! Step 3 runs before step 4, so a better train that appears after the
//! first three matches in the dataset is never considered. This ordering is
//! part of the observable behaviour and is kept on purpose.

mod config;
mod criteria;
mod error;
mod lookup;
mod search;


pub use config::FinderConfig;
pub use criteria::Criteria;
pub use error::ValidationError;
pub use lookup::TrainFinder;
pub use search::{ValidatedQuery, find_trains, find_trains_with, select, validate};
