//! CLI argument definitions using clap
//!
//! Commands:
//! - parksearch search --config <path>
//! - parksearch explain --config <path>
//! - parksearch check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// parksearch - Parameterized search over a catalog of public parks
#[derive(Parser, Debug)]
#[command(name = "parksearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read criteria from stdin and print matching parks
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./parksearch.json")]
        config: PathBuf,
    },

    /// Read criteria from stdin and print the statement they compose to
    Explain {
        /// Path to configuration file
        #[arg(long, default_value = "./parksearch.json")]
        config: PathBuf,
    },

    /// Open the catalog and report its row counts
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./parksearch.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
