//! Crate-level error type.
//!
//! A lookup can fail for two unrelated reasons: the dataset could not be
//! loaded, or the user's input was rejected. Both travel through the same
//! [`Error`] so callers get one `Result`, but the variants stay distinct so
//! they can be told apart.

use crate::dataset::DatasetError;
use crate::finder::ValidationError;

/// Errors returned by [`TrainFinder::lookup`](crate::finder::TrainFinder::lookup).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset could not be read or decoded
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// The lookup input was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns true if the input was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns true if the dataset failed to load.
    pub fn is_dataset(&self) -> bool {
        matches!(self, Error::Dataset(_))
    }

    /// Returns the validation failure, if that is what this is.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            Error::Validation(e) => Some(*e),
            Error::Dataset(_) => None,
        }
    }
}
