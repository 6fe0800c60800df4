//! Dataset error types
//!
//! Error codes:
//! - CREATOR_DATASET_IO
//! - CREATOR_DATASET_MALFORMED
//! - CREATOR_DATASET_DUPLICATE_ID
//! - CREATOR_DATASET_INVALID_REVENUE

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading or validating a dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path}: {reason}")]
    Io {
        /// Path of the dataset file
        path: String,
        /// Underlying I/O message
        reason: String,
    },

    /// Dataset is not a JSON array of creators
    #[error("Malformed dataset {path}: {reason}")]
    Malformed {
        /// Path of the dataset file
        path: String,
        /// Parser message
        reason: String,
    },

    /// Two records share an identifier
    #[error("Duplicate creator id {0}")]
    DuplicateId(u64),

    /// Revenue is negative or not finite
    #[error("Creator {id} has invalid revenue {revenue}")]
    InvalidRevenue {
        /// Offending record
        id: u64,
        /// Offending value
        revenue: f64,
    },
}

impl DatasetError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DatasetError::Io { .. } => "CREATOR_DATASET_IO",
            DatasetError::Malformed { .. } => "CREATOR_DATASET_MALFORMED",
            DatasetError::DuplicateId(_) => "CREATOR_DATASET_DUPLICATE_ID",
            DatasetError::InvalidRevenue { .. } => "CREATOR_DATASET_INVALID_REVENUE",
        }
    }
}
