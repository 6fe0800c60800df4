//! View model returned to the presentation layer

use serde::{Deserialize, Serialize};

use crate::records::{Creator, DerivedMetrics};

use super::pagination::PaginationMeta;

/// The consolidated result of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorViewModel {
    /// Records on the current page, filtered and globally sorted
    pub rows: Vec<Creator>,
    /// Metrics over the full filtered set
    pub metrics: DerivedMetrics,
    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl CreatorViewModel {
    /// Returns true if the current page holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows on the current page
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &Creator> {
        self.rows.iter()
    }
}
