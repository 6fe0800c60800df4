//! creatorview CLI entry point
//!
//! A minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to CLI commands (via cli::run)
//! 3. Writes failures as a JSON error response
//! 4. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module.

use creatorview::cli;

fn main() {
    if let Err(e) = cli::run() {
        if cli::write_error(e.code(), &e.to_string()).is_err() {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
