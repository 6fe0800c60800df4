//! creatorview - a deterministic view pipeline for creator dashboards
//!
//! raw dataset → filter → sort → paginate, with metrics computed over the
//! whole filtered set.

pub mod cli;
pub mod dataset;
pub mod observability;
pub mod pipeline;
pub mod records;
