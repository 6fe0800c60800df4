//! Pipeline error types
//!
//! Error codes:
//! - CREATOR_INVALID_PAGE_SIZE

use thiserror::Error;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors raised while building a view model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Page size was zero or negative
    #[error("Invalid page size {page_size}: must be at least 1")]
    InvalidPageSize {
        /// The rejected page size
        page_size: i64,
    },
}

impl PipelineError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::InvalidPageSize { .. } => "CREATOR_INVALID_PAGE_SIZE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_size_display() {
        let err = PipelineError::InvalidPageSize { page_size: 0 };
        assert_eq!(err.code(), "CREATOR_INVALID_PAGE_SIZE");
        assert!(err.to_string().contains("page size 0"));
    }
}
