//! Pagination bounds
//!
//! Page numbers are untrusted and clamped into `[1, max(total_pages, 1)]`;
//! they are never rejected. Page sizes must be at least 1.

use serde::{Deserialize, Serialize};

use super::errors::{PipelineError, PipelineResult};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A raw, unvalidated pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    /// Requested page, 1-indexed
    pub page: i64,
    /// Requested items per page
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Creates a request
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Resolves the request against a result set of `total_items`.
    pub fn resolve(&self, total_items: usize) -> PipelineResult<PageWindow> {
        let page_size = self.validate()?;
        let total_pages = total_items.div_ceil(page_size);
        let page = clamp_page(self.page, total_pages);

        // page <= max(total_pages, 1), so the start never overflows
        let start = ((page - 1) * page_size).min(total_items);
        let end = start.saturating_add(page_size).min(total_items);

        Ok(PageWindow {
            page,
            page_size,
            total_items,
            total_pages,
            start,
            end,
        })
    }

    /// Checks the page size and returns it as an item count
    pub fn validate(&self) -> PipelineResult<usize> {
        if self.page_size < 1 {
            return Err(PipelineError::InvalidPageSize {
                page_size: self.page_size,
            });
        }
        Ok(usize::try_from(self.page_size).unwrap_or(usize::MAX))
    }
}

/// Clamps a requested page into the valid range.
///
/// With zero pages the only valid page is 1.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).unwrap_or(usize::MAX).min(last)
}

/// A resolved slice window over a sorted result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Clamped page, 1-indexed
    pub page: usize,
    /// Items per page
    pub page_size: usize,
    /// Items in the whole result set
    pub total_items: usize,
    /// Number of pages, 0 for an empty result set
    pub total_pages: usize,
    /// First index of the slice (inclusive)
    pub start: usize,
    /// Last index of the slice (exclusive)
    pub end: usize,
}

impl PageWindow {
    /// Returns the slice of `items` covered by this window
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }

    /// Returns true if the requested page differs from the clamped one
    pub fn was_clamped(&self, requested: i64) -> bool {
        i64::try_from(self.page).map_or(true, |page| page != requested)
    }

    /// Builds the metadata exposed to consumers
    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.page < self.total_pages,
            has_prev: self.page > 1,
        }
    }
}

/// Pagination metadata for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page after clamping
    pub page: usize,
    /// Items per page as requested
    pub page_size: usize,
    /// Items after filtering, before paging
    pub total_items: usize,
    /// Number of pages
    pub total_pages: usize,
    /// A later page exists
    pub has_next: bool,
    /// An earlier page exists
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Returns the 1-based inclusive item numbers shown on this page.
    ///
    /// `None` when the page holds no items.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let first = self.page.saturating_sub(1).saturating_mul(self.page_size).saturating_add(1);
        if self.total_items == 0 || first > self.total_items {
            return None;
        }
        let last = self.page.saturating_mul(self.page_size).min(self.total_items);
        Some((first, last))
    }
}
