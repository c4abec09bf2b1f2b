//! Timetable dataset loading.
//!
//! The dataset is a JSON array of train records. Loading happens in two
//! stages: serde decodes each record into a [`TrainRecord`] DTO, then the
//! conversion step parses the `HH:MM:SS` time strings into domain values.
//! A single bad record fails the whole load.
//!
//! Where the records come from is abstracted behind [`TrainSource`], so the
//! finder can be driven from a file on disk or from an in-memory collection.

mod convert;
mod error;
mod source;
mod types;

pub use convert::{ConversionError, convert_record, parse_trains};
pub use error::DatasetError;
pub use source::{DEFAULT_DATA_PATH, DatasetConfig, JsonFileSource, StaticSource, TrainSource};
pub use types::TrainRecord;
