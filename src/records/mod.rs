//! Record operations for creatorview
//!
//! Pure, stateless functions over a slice of creator records.
//!
//! # Operations
//!
//! 1. Filter by case-insensitive name search and active flag
//! 2. Sort by a numeric metric with a name tie-break
//! 3. Aggregate summary metrics
//!
//! # Invariants
//!
//! - Inputs are borrowed, never mutated
//! - Every operation returns a freshly allocated result

mod creator;
mod filters;
mod metrics;
mod sorter;

pub use creator::Creator;
pub use filters::{filter_creators, CreatorFilter, FilterCriteria};
pub use metrics::{derive_metrics, DerivedMetrics};
pub use sorter::{sort_creators, CreatorSorter, SortDirection, SortKey, SortSpec};

/// Filters then sorts a dataset in one call.
pub fn filter_and_sort(data: &[Creator], criteria: &FilterCriteria, sort: &SortSpec) -> Vec<Creator> {
    let filtered = CreatorFilter::apply(data, criteria);
    CreatorSorter::sort(&filtered, sort)
}
