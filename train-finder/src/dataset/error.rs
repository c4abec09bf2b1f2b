//! Dataset loading error types.

use std::path::PathBuf;

use super::convert::ConversionError;

/// Errors that can occur while loading the timetable dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file is missing or unreadable
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of well-formed train records
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A record decoded but one of its fields failed to parse
    #[error("invalid record #{index} (train {train_id}): {source}")]
    InvalidRecord {
        index: usize,
        train_id: i64,
        #[source]
        source: ConversionError,
    },
}
