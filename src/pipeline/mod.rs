//! View pipeline subsystem for creatorview
//!
//! Composes the record operations into one view model per request.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter the full dataset
//! 2. Sort the entire filtered set
//! 3. Count items and pages
//! 4. Clamp the requested page
//! 5. Slice the page window
//! 6. Compute metrics over the filtered set
//! 7. Assemble pagination metadata
//!
//! # Invariants
//!
//! - Global sort happens before slicing
//! - Metrics never depend on the page
//! - Out-of-range pages clamp, never fail

mod errors;
mod options;
mod pagination;
mod pipeline;
mod view;

pub use errors::{PipelineError, PipelineResult};
pub use options::ViewOptions;
pub use pagination::{clamp_page, PageRequest, PageWindow, PaginationMeta, DEFAULT_PAGE_SIZE};
pub use pipeline::{build_view_model, ViewPipeline};
pub use view::CreatorViewModel;
