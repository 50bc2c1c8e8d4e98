//! Park catalog store
//!
//! Executes composed statements against the SQLite catalog and
//! materializes the rows.
//!
//! # Tables consumed
//!
//! - `parks(id, name, address, description, history, url, latitude,
//!   longitude, tokens)`
//! - `park_times(park_id, day, open_time, close_time)`
//!
//! The store never creates, migrates, or writes these tables.

mod record;
mod store;

pub use record::{IntervalMatch, ResultRecord};
pub use store::{execute, CatalogStats, ParkCatalog, ParkStore, SessionCatalog, DEFAULT_BUSY_TIMEOUT};
