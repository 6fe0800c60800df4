//! Creator filtering
//!
//! Filters records by a case-insensitive name search and the active flag.
//! Both conditions must hold (AND semantics). Relative order is preserved.

use serde::{Deserialize, Serialize};

use super::creator::Creator;

/// Filter criteria applied before sorting and pagination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Substring matched against the name, case-insensitive. Empty matches all.
    pub search: String,
    /// Keep only active creators
    pub active_only: bool,
}

impl FilterCriteria {
    /// Creates criteria from a search string and active flag
    pub fn new(search: impl Into<String>, active_only: bool) -> Self {
        Self {
            search: search.into(),
            active_only,
        }
    }

    /// Search-only criteria
    pub fn search(search: impl Into<String>) -> Self {
        Self::new(search, false)
    }

    /// Active-only criteria with no search
    pub fn active_only() -> Self {
        Self::new("", true)
    }

    /// Returns true if these criteria keep every record
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && !self.active_only
    }
}

/// Evaluates filter criteria against creators
pub struct CreatorFilter;

impl CreatorFilter {
    /// Returns the matching subsequence of `data`.
    pub fn apply(data: &[Creator], criteria: &FilterCriteria) -> Vec<Creator> {
        let needle = criteria.search.to_lowercase();
        data.iter()
            .filter(|creator| Self::matches_with(creator, &needle, criteria.active_only))
            .cloned()
            .collect()
    }

    /// Checks if a single creator matches the criteria
    pub fn matches(creator: &Creator, criteria: &FilterCriteria) -> bool {
        Self::matches_with(creator, &criteria.search.to_lowercase(), criteria.active_only)
    }

    fn matches_with(creator: &Creator, needle: &str, active_only: bool) -> bool {
        let matches_search = needle.is_empty() || creator.name.to_lowercase().contains(needle);
        let matches_active = !active_only || creator.active;
        matches_search && matches_active
    }
}

/// Filters `data` by search string and active flag.
pub fn filter_creators(data: &[Creator], search: &str, active_only: bool) -> Vec<Creator> {
    CreatorFilter::apply(data, &FilterCriteria::new(search, active_only))
}
