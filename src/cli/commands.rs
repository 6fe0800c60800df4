//! CLI command implementations
//!
//! Each command loads the dataset once, then hands it to the pipeline.

use std::io::{self, BufRead, Write};

use crate::dataset::{DataSource, JsonFileDataSource, StaticDataSource};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::pipeline::{build_view_model, ViewOptions};
use crate::records::{derive_metrics, filter_creators, Creator};

use super::args::{Cli, Command, SourceArgs};
use super::errors::{CliError, CliResult};
use super::io::{read_requests, write_error_to, write_response, write_response_to};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    Logger::set_min_severity(cli.log_level);
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::View { source, view } => {
            let data = load_dataset(&source)?;
            view_command(&data, &view.to_options())
        }
        Command::Serve { source } => {
            let data = load_dataset(&source)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            serve(&data, stdin.lock(), &mut stdout)?;
            Ok(())
        }
        Command::Metrics { source, filter } => {
            let data = load_dataset(&source)?;
            let criteria = filter.to_criteria();
            let filtered = filter_creators(&data, &criteria.search, criteria.active_only);
            write_response(&derive_metrics(&filtered))
        }
    }
}

/// Loads the dataset named by the source flags
pub fn load_dataset(source: &SourceArgs) -> CliResult<Vec<Creator>> {
    let loader: Box<dyn DataSource> = match &source.dataset {
        Some(path) => Box::new(JsonFileDataSource::new(path)),
        None => Box::new(StaticDataSource::default()),
    };
    let origin = loader.describe();

    match loader.load() {
        Ok(data) => {
            let records = data.len().to_string();
            log_event_with_fields(
                Event::DatasetLoaded,
                &[("records", records.as_str()), ("source", origin.as_str())],
            );
            Ok(data)
        }
        Err(e) => {
            let message = e.to_string();
            log_event_with_fields(
                Event::DatasetRejected,
                &[
                    ("code", e.code()),
                    ("message", message.as_str()),
                    ("source", origin.as_str()),
                ],
            );
            Err(e.into())
        }
    }
}

/// Builds one view and writes it to stdout
pub fn view_command(data: &[Creator], options: &ViewOptions) -> CliResult<()> {
    let view = build_view_model(data, options)?;
    write_response(&view)
}

/// Answers one request per input line until end of input.
///
/// Bad requests get an error response and the loop continues. Returns
/// the number of requests answered successfully.
pub fn serve<R: BufRead, W: Write>(data: &[Creator], reader: R, writer: &mut W) -> CliResult<usize> {
    let records = data.len().to_string();
    log_event_with_fields(Event::Serving, &[("records", records.as_str())]);

    let mut served = 0usize;
    let mut failed = 0usize;

    for request in read_requests(reader) {
        log_event_with_fields(Event::ViewRequested, &[]);

        let result = request
            .and_then(|options| build_view_model(data, &options).map_err(CliError::from));
        match result {
            Ok(view) => {
                write_response_to(writer, &view)?;
                served += 1;
            }
            Err(e) => {
                let message = e.to_string();
                log_event_with_fields(
                    Event::ViewRejected,
                    &[("code", e.code()), ("message", message.as_str())],
                );
                write_error_to(writer, e.code(), &message)?;
                failed += 1;
            }
        }
    }

    let served_field = served.to_string();
    let failed_field = failed.to_string();
    log_event_with_fields(
        Event::ServeComplete,
        &[
            ("failed", failed_field.as_str()),
            ("served", served_field.as_str()),
        ],
    );
    Ok(served)
}
