//! Data sources
//!
//! The pipeline takes a borrowed slice, so swapping the built-in fixture
//! for another source never touches the pipeline.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::records::Creator;

use super::errors::{DatasetError, DatasetResult};

/// A source of creator records
pub trait DataSource {
    /// Loads the full dataset
    fn load(&self) -> DatasetResult<Vec<Creator>>;

    /// Short description used in logs
    fn describe(&self) -> String;
}

/// In-memory dataset. Defaults to the built-in fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDataSource {
    creators: Vec<Creator>,
}

impl StaticDataSource {
    /// Wraps an in-memory dataset
    pub fn new(creators: Vec<Creator>) -> Self {
        Self { creators }
    }
}

impl Default for StaticDataSource {
    fn default() -> Self {
        Self::new(Creator::fixture())
    }
}

impl DataSource for StaticDataSource {
    fn load(&self) -> DatasetResult<Vec<Creator>> {
        validate_dataset(&self.creators)?;
        Ok(self.creators.clone())
    }

    fn describe(&self) -> String {
        "<built-in>".to_string()
    }
}

/// Dataset read from a JSON array file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileDataSource {
    path: PathBuf,
}

impl JsonFileDataSource {
    /// Creates a source reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileDataSource {
    fn load(&self) -> DatasetResult<Vec<Creator>> {
        let path = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|e| DatasetError::Io {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let creators: Vec<Creator> =
            serde_json::from_str(&content).map_err(|e| DatasetError::Malformed {
                path,
                reason: e.to_string(),
            })?;

        validate_dataset(&creators)?;
        Ok(creators)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Checks dataset invariants: unique ids, finite non-negative revenue.
pub fn validate_dataset(creators: &[Creator]) -> DatasetResult<()> {
    let mut seen = HashSet::with_capacity(creators.len());
    for creator in creators {
        if !seen.insert(creator.id) {
            return Err(DatasetError::DuplicateId(creator.id));
        }
        if !creator.revenue.is_finite() || creator.revenue < 0.0 {
            return Err(DatasetError::InvalidRevenue {
                id: creator.id,
                revenue: creator.revenue,
            });
        }
    }
    Ok(())
}
