//! Search criteria for the park catalog
//!
//! A criteria set is an open-ended combination of optional filters:
//!
//! - `name`: case-insensitive name prefix
//! - `query_terms`: whole-word terms, all of which must match
//! - `zip_code`: address substring
//! - `open_at`: day and HHMM time the park must be open at
//! - `near`: point and maximum distance in miles
//!
//! Criteria are validated in full before any query text is composed.

mod parser;
mod types;

pub use types::{Near, OpenAt, SearchCriteria, Weekday, CRITERIA_KEYS, MAX_TIME};
