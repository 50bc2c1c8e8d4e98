//! CLI command implementations
//!
//! Every command loads the config first and applies its log level.
//! Search errors are responses, not process failures: they are written to
//! stdout as `{"status":"error",...}` and the command still succeeds.

use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};

use crate::composer::ExplainPlan;
use crate::criteria::SearchCriteria;
use crate::error::SearchResult;
use crate::search::{explain as explain_criteria, ParkSearch};
use crate::store::{ParkStore, ResultRecord};

use super::args::Command;
use super::config::SearchConfig;
use super::errors::CliResult;
use super::io::{read_request, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Search { config } => search(&config),
        Command::Explain { config } => explain(&config),
        Command::Check { config } => check(&config),
    }
}

/// Search the catalog with criteria read from stdin
pub fn search(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let request = read_request()?;
    respond(run_search(&config.store(), &request))
}

/// Print the statement stdin criteria compose to
///
/// The catalog is never opened.
pub fn explain(config_path: &Path) -> CliResult<()> {
    load_config(config_path)?;
    let request = read_request()?;
    write_response(serde_json::to_value(run_explain(&request))?)
}

/// Report row counts of the configured catalog
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    respond(run_check(&config.store()))
}

/// Parses `request` and searches `store`
pub fn run_search(store: &ParkStore, request: &Value) -> SearchResult<Vec<ResultRecord>> {
    ParkSearch::new(store).search_json(request)
}

/// Parses `request` and explains it; unparseable criteria yield a
/// rejected plan
pub fn run_explain(request: &Value) -> ExplainPlan {
    match SearchCriteria::from_json(request) {
        Ok(criteria) => explain_criteria(&criteria),
        Err(err) => ExplainPlan::from_error(&err),
    }
}

/// Counts rows in `store`
pub fn run_check(store: &ParkStore) -> SearchResult<Value> {
    let stats = store.stats()?;
    Ok(json!({
        "database_path": store.path().display().to_string(),
        "parks": stats.parks,
        "intervals": stats.intervals,
    }))
}

fn load_config(config_path: &Path) -> CliResult<SearchConfig> {
    let config = SearchConfig::load(config_path)?;
    config.apply_logging()?;
    Ok(config)
}

fn respond<T: Serialize>(result: SearchResult<T>) -> CliResult<()> {
    match result {
        Ok(data) => write_response(serde_json::to_value(data)?),
        Err(err) => write_error(err.code(), &err.to_string()),
    }
}
