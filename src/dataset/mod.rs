//! Dataset sources for creatorview
//!
//! - `StaticDataSource`: in-memory records, the built-in fixture by default
//! - `JsonFileDataSource`: a JSON array of creators on disk
//!
//! Every source validates id uniqueness and revenue before handing
//! records to the pipeline.

mod errors;
mod source;

pub use errors::{DatasetError, DatasetResult};
pub use source::{validate_dataset, DataSource, JsonFileDataSource, StaticDataSource};
