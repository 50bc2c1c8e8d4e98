//! CLI-specific error types
//!
//! CLI errors end the process with a non-zero status. Search errors are not
//! CLI errors; they are written to stdout as error responses.

use std::fmt;
use std::io;
use std::path::Path;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Config file missing, unreadable, or with bad values
    ConfigError,
    /// Criteria could not be read from stdin or a response could not be written
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PARKS_CLI_CONFIG_ERROR",
            Self::IoError => "PARKS_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Config file at `path` could not be read
    pub fn config_unreadable(path: &Path, e: io::Error) -> Self {
        Self::config_error(format!("cannot read config {}: {}", path.display(), e))
    }

    /// Config file at `path` is not a valid config document
    pub fn config_malformed(path: &Path, e: serde_json::Error) -> Self {
        Self::config_error(format!("config {} is not valid: {}", path.display(), e))
    }

    /// Nothing but whitespace arrived on stdin
    pub fn empty_criteria() -> Self {
        Self::io_error("no criteria on stdin; expected one JSON object")
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("malformed JSON: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
