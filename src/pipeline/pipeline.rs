//! View pipeline for creatorview
//!
//! Builds a view model from a dataset, deterministically.
//!
//! Execution flow (strict order):
//! 1. Filter the full dataset
//! 2. Sort the entire filtered set
//! 3. Count items and pages
//! 4. Clamp the requested page
//! 5. Slice the page window out of the sorted set
//! 6. Compute metrics over the filtered set
//! 7. Assemble pagination metadata

use crate::observability::{log_event_with_fields, Event};
use crate::records::{Creator, CreatorFilter, CreatorSorter, DerivedMetrics};

use super::errors::PipelineResult;
use super::options::ViewOptions;
use super::view::CreatorViewModel;

/// Pipeline bound to one dataset.
///
/// The dataset is borrowed, so any source can feed it.
#[derive(Debug, Clone, Copy)]
pub struct ViewPipeline<'a> {
    data: &'a [Creator],
}

impl<'a> ViewPipeline<'a> {
    /// Creates a pipeline over `data`
    pub fn new(data: &'a [Creator]) -> Self {
        Self { data }
    }

    /// Returns the underlying dataset
    pub fn data(&self) -> &'a [Creator] {
        self.data
    }

    /// Builds the view model for `options`.
    ///
    /// Same data and same options always give the same result. The only
    /// error is a page size below 1.
    pub fn build(&self, options: &ViewOptions) -> PipelineResult<CreatorViewModel> {
        // Fail before doing any work
        let request = options.page_request();
        request.validate()?;

        // Step 1: Filter
        let filtered = CreatorFilter::apply(self.data, &options.criteria());

        // Step 2: Sort the whole filtered set, never a page of it
        let sorted = CreatorSorter::sort(&filtered, &options.sort_spec());

        // Steps 3-5: Count, clamp, slice
        let window = request.resolve(sorted.len())?;
        if window.was_clamped(request.page) {
            let requested = request.page.to_string();
            let clamped = window.page.to_string();
            log_event_with_fields(
                Event::PageClamped,
                &[("clamped", clamped.as_str()), ("requested", requested.as_str())],
            );
        }
        let rows = window.slice(&sorted).to_vec();

        // Step 6: Metrics over the filtered set, never the page slice
        let metrics = DerivedMetrics::compute(&filtered);

        // Step 7: Assemble
        let pagination = window.meta();

        let total_items = pagination.total_items.to_string();
        let returned = rows.len().to_string();
        let page = pagination.page.to_string();
        log_event_with_fields(
            Event::ViewBuilt,
            &[
                ("page", page.as_str()),
                ("returned", returned.as_str()),
                ("total_items", total_items.as_str()),
            ],
        );

        Ok(CreatorViewModel {
            rows,
            metrics,
            pagination,
        })
    }
}

/// Builds the view model for `data` and `options`.
pub fn build_view_model(data: &[Creator], options: &ViewOptions) -> PipelineResult<CreatorViewModel> {
    ViewPipeline::new(data).build(options)
}
