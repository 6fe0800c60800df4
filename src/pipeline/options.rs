//! View options
//!
//! Every input the pipeline accepts, with its default. Requests may
//! supply any subset of fields; missing fields take the defaults below.
//!
//! | field           | default |
//! |-----------------|---------|
//! | `search`        | `""`    |
//! | `activeOnly`    | `false` |
//! | `sortKey`       | none    |
//! | `sortDirection` | `desc`  |
//! | `page`          | `1`     |
//! | `pageSize`      | `10`    |

use serde::{Deserialize, Serialize};

use crate::records::{FilterCriteria, SortDirection, SortKey, SortSpec};

use super::pagination::{PageRequest, DEFAULT_PAGE_SIZE};

/// Options for a single view request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ViewOptions {
    /// Case-insensitive name search
    pub search: String,
    /// Keep only active creators
    pub active_only: bool,
    /// Metric to sort by, none for dataset order
    pub sort_key: Option<SortKey>,
    /// Sort direction
    pub sort_direction: SortDirection,
    /// Requested page, 1-indexed, clamped by the pipeline
    pub page: i64,
    /// Items per page, must be at least 1
    pub page_size: i64,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            search: String::new(),
            active_only: false,
            sort_key: None,
            sort_direction: SortDirection::Desc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewOptions {
    /// Returns the filter criteria
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.search.clone(), self.active_only)
    }

    /// Returns the sort specification
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.sort_key, self.sort_direction)
    }

    /// Returns the raw pagination request
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// Sets the search string and returns to page 1
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    /// Sets the active-only flag and returns to page 1
    pub fn with_active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self.page = 1;
        self
    }

    /// Sets the sort and returns to page 1
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort_key = sort.key;
        self.sort_direction = sort.direction;
        self.page = 1;
        self
    }

    /// Cycles the sort for a column header and returns to page 1
    pub fn toggle_sort(self, key: SortKey) -> Self {
        let next = self.sort_spec().toggle(key);
        self.with_sort(next)
    }

    /// Sets the page size and returns to page 1
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self.page = 1;
        self
    }

    /// Moves to `page` without touching any other option
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Clears search, active-only and sort, keeping the page size
    pub fn reset_filters(self) -> Self {
        Self {
            page_size: self.page_size,
            ..Self::default()
        }
    }

    /// Returns true if any filter or sort is in effect
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || self.active_only || self.sort_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ViewOptions::default();

        assert_eq!(options.criteria(), FilterCriteria::default());
        assert_eq!(options.sort_spec(), SortSpec::unsorted());
        assert_eq!(options.page_request(), PageRequest::new(1, 10));
        assert!(!options.has_active_filters());
    }

    #[test]
    fn test_partial_json() {
        let options: ViewOptions = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(options, ViewOptions::default().with_page(3));

        let options: ViewOptions =
            serde_json::from_str(r#"{"sortKey": "revenue", "sortDirection": "asc"}"#).unwrap();
        assert_eq!(options.sort_spec(), SortSpec::asc(SortKey::Revenue));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ViewOptions, _> = serde_json::from_str(r#"{"limit": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_changes_reset_page() {
        let base = ViewOptions::default().with_page(4);

        assert_eq!(base.clone().with_search("a").page, 1);
        assert_eq!(base.clone().with_active_only(true).page, 1);
        assert_eq!(base.clone().with_sort(SortSpec::asc(SortKey::Followers)).page, 1);
        assert_eq!(base.clone().with_page_size(5).page, 1);
        assert_eq!(base.toggle_sort(SortKey::Revenue).page, 1);
    }

    #[test]
    fn test_reset_filters_keeps_page_size() {
        let options = ViewOptions::default()
            .with_search("neha")
            .with_active_only(true)
            .with_sort(SortSpec::asc(SortKey::Revenue))
            .with_page_size(25)
            .with_page(2);

        assert!(options.has_active_filters());

        let reset = options.reset_filters();
        assert_eq!(reset, ViewOptions::default().with_page_size(25));
    }

    #[test]
    fn test_toggle_sort() {
        let options = ViewOptions::default().toggle_sort(SortKey::Followers);
        assert_eq!(options.sort_spec(), SortSpec::desc(SortKey::Followers));

        let options = options.toggle_sort(SortKey::Followers);
        assert_eq!(options.sort_spec(), SortSpec::asc(SortKey::Followers));

        let options = options.toggle_sort(SortKey::Followers);
        assert_eq!(options.sort_spec(), SortSpec::unsorted());
    }
}
