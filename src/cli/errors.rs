//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::dataset::DatasetError;
use crate::pipeline::PipelineError;

/// CLI error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// I/O error on stdin/stdout
    #[error("I/O error: {0}")]
    Io(String),

    /// Request line was not a valid view request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Dataset could not be loaded
    #[error("{0}")]
    Dataset(#[from] DatasetError),

    /// Pipeline rejected the request
    #[error("{0}")]
    Pipeline(#[from] PipelineError),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Io(_) => "CREATOR_CLI_IO_ERROR",
            CliError::InvalidRequest(_) => "CREATOR_CLI_INVALID_REQUEST",
            CliError::Dataset(e) => e.code(),
            CliError::Pipeline(e) => e.code(),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            CliError::Io(e.to_string())
        } else {
            CliError::InvalidRequest(e.to_string())
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let err: CliError = PipelineError::InvalidPageSize { page_size: 0 }.into();
        assert_eq!(err.code(), "CREATOR_INVALID_PAGE_SIZE");

        let err: CliError = DatasetError::DuplicateId(2).into();
        assert_eq!(err.code(), "CREATOR_DATASET_DUPLICATE_ID");
    }

    #[test]
    fn test_json_syntax_error_is_invalid_request() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = parse_err.into();
        assert_eq!(err.code(), "CREATOR_CLI_INVALID_REQUEST");
    }
}
