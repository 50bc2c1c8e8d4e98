//! CLI module for parksearch
//!
//! Provides command-line interface for:
//! - search: Criteria from stdin, matching parks to stdout
//! - explain: Criteria from stdin, composed statement to stdout
//! - check: Catalog row counts

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, explain, run, run_check, run_command, run_explain, run_search, search};
pub use config::SearchConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
