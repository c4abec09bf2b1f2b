//! Where train records come from.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Train;

use super::convert::parse_trains;
use super::error::DatasetError;

/// Dataset file read when no other path is configured.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Trait for providing the train collection.
///
/// The finder calls [`TrainSource::load`] once per lookup and never caches
/// the result, so a source is free to re-read its backing store every time.
pub trait TrainSource {
    /// Load every train record, in dataset order.
    fn load(&self) -> Result<Vec<Train>, DatasetError>;
}

/// Configuration for the on-disk dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Path to the JSON dataset file.
    pub path: PathBuf,
}

impl DatasetConfig {
    /// Create a config pointing at the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        // Relative to the process working directory
        Self::new(DEFAULT_DATA_PATH)
    }
}

/// Reads the dataset from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    config: DatasetConfig,
}

impl JsonFileSource {
    /// Create a new file-backed source.
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    /// Get the dataset file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl TrainSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Train>, DatasetError> {
        let path = self.path();
        debug!(path = %path.display(), "reading dataset");

        // The file handle is closed before decoding starts
        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        parse_trains(&contents)
    }
}

/// An in-memory collection, handed out as-is on every load.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    trains: Vec<Train>,
}

impl StaticSource {
    /// Wrap an existing collection.
    pub fn new(trains: Vec<Train>) -> Self {
        Self { trains }
    }
}

impl TrainSource for StaticSource {
    fn load(&self) -> Result<Vec<Train>, DatasetError> {
        Ok(self.trains.clone())
    }
}
