//! CLI module for creatorview
//!
//! Provides command-line interface for:
//! - view: Build one view model and print it
//! - serve: Answer JSON view requests line by line
//! - metrics: Print metrics for a filtered dataset

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, FilterArgs, SourceArgs, ViewArgs};
pub use commands::{load_dataset, run, run_command, serve, view_command};
pub use errors::{CliError, CliResult};
pub use io::{parse_request, read_requests, write_error, write_response};
