//! Configuration file for the parksearch binary
//!
//! ```json
//! {
//!   "database_path": "data/parks.db",
//!   "busy_timeout_ms": 5000,
//!   "log_level": "info"
//! }
//! ```
//!
//! Only `database_path` is required.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::store::ParkStore;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// SQLite catalog file (required)
    pub database_path: String,

    /// Busy timeout in milliseconds (optional, default 5000)
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_busy_timeout_ms() -> u64 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl SearchConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| CliError::config_unreadable(path, e))?;

        let config: SearchConfig =
            serde_json::from_str(&content).map_err(|e| CliError::config_malformed(path, e))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> CliResult<()> {
        if self.database_path.trim().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if self.busy_timeout_ms == 0 {
            return Err(CliError::config_error("busy_timeout_ms must be > 0"));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        Severity::from_name(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected trace, info, warn or error.",
                self.log_level
            ))
        })
    }

    /// Sets the process-wide log level and records the loaded config
    pub fn apply_logging(&self) -> CliResult<()> {
        Logger::set_min_severity(self.severity()?);
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("database_path", self.database_path.as_str()),
                ("log_level", self.log_level.as_str()),
            ],
        );
        Ok(())
    }

    /// Store described by this config
    pub fn store(&self) -> ParkStore {
        ParkStore::new(&self.database_path)
            .with_busy_timeout(Duration::from_millis(self.busy_timeout_ms))
    }
}
