//! Search error types
//!
//! Error codes:
//! - PARKS_INVALID_CRITERIA (REJECT) - bad key or malformed value, detected
//!   before any query text is composed
//! - PARKS_STORAGE_ERROR (ERROR) - the catalog could not be opened or the
//!   statement failed; never retried
//!
//! An empty result set is not an error.

use std::fmt;

use thiserror::Error;

/// How a search error should be treated by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Caller supplied an unusable request
    Reject,
    /// The request was fine but the store failed
    Error,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Reject => write!(f, "REJECT"),
            ErrorSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// Errors returned by a park search
#[derive(Debug, Error)]
pub enum SearchError {
    /// A criteria key is unknown or its value violates the documented shape
    #[error("invalid criteria '{key}': {reason}")]
    InvalidCriteria { key: String, reason: String },

    /// The catalog store failed while performing `operation`
    #[error("storage error while {operation}: {source}")]
    StorageError {
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl SearchError {
    /// Create an invalid criteria error for `key`
    pub fn invalid_criteria(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SearchError::InvalidCriteria {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a storage error wrapping the store's own error
    pub fn storage(operation: &'static str, source: rusqlite::Error) -> Self {
        SearchError::StorageError { operation, source }
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidCriteria { .. } => "PARKS_INVALID_CRITERIA",
            SearchError::StorageError { .. } => "PARKS_STORAGE_ERROR",
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SearchError::InvalidCriteria { .. } => ErrorSeverity::Reject,
            SearchError::StorageError { .. } => ErrorSeverity::Error,
        }
    }

    /// True when the caller, not the store, is at fault
    pub fn is_client_error(&self) -> bool {
        self.severity() == ErrorSeverity::Reject
    }

    /// The rejected criteria key, if this is an invalid criteria error
    pub fn key(&self) -> Option<&str> {
        match self {
            SearchError::InvalidCriteria { key, .. } => Some(key),
            SearchError::StorageError { .. } => None,
        }
    }
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;
