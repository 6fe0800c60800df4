//! CLI argument definitions using clap
//!
//! Commands:
//! - creatorview view [--dataset <path>] [view options]
//! - creatorview serve [--dataset <path>]
//! - creatorview metrics [--dataset <path>] [--search <s>] [--active-only]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::Severity;
use crate::pipeline::{ViewOptions, DEFAULT_PAGE_SIZE};
use crate::records::{FilterCriteria, SortDirection, SortKey};

/// creatorview - filter, sort and paginate creator datasets
#[derive(Parser, Debug)]
#[command(name = "creatorview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Lowest log severity written to stderr
    #[arg(long, global = true, default_value = "info")]
    pub log_level: Severity,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one view model and exit
    View {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Answer one JSON view request per stdin line
    Serve {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print metrics for the filtered dataset and exit
    Metrics {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Where the dataset comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSON array of creators; the built-in dataset when omitted
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

/// Filter flags
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive name search
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only include active creators
    #[arg(long)]
    pub active_only: bool,
}

impl FilterArgs {
    /// Converts the flags into filter criteria
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.search.clone(), self.active_only)
    }
}

/// View flags, one per view option
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Metric to sort by (followers, revenue)
    #[arg(long)]
    pub sort_key: Option<SortKey>,

    /// Sort direction (asc, desc)
    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,

    /// Page to show, 1-indexed
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, allow_negative_numbers = true)]
    pub page_size: i64,
}

impl ViewArgs {
    /// Converts the flags into view options
    pub fn to_options(&self) -> ViewOptions {
        ViewOptions {
            search: self.filter.search.clone(),
            active_only: self.filter.active_only,
            sort_key: self.sort_key,
            sort_direction: self.direction,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
