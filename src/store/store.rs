//! SQLite-backed park catalog
//!
//! The catalog is read-only. A connection carries its own registration of
//! `haversine_distance`, so a `ParkStore` opens and registers a fresh
//! connection for every search and drops it afterwards. Callers that manage
//! their own connection use `SessionCatalog`, which registers the function
//! on that connection before use.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params_from_iter, Connection, OpenFlags};

use super::record::ResultRecord;
use crate::composer::{ComposedQuery, PARKS_TABLE, PARK_TIMES_TABLE};
use crate::error::{SearchError, SearchResult};
use crate::geo::register_distance_function;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

/// Default time to wait on a locked database
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Anything that can run a composed search statement
pub trait ParkCatalog {
    /// Executes `query` and materializes every row
    fn fetch(&self, query: &ComposedQuery) -> SearchResult<Vec<ResultRecord>>;
}

/// Row counts reported by `ParkStore::stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub parks: u64,
    pub intervals: u64,
}

/// Catalog stored in a SQLite file
#[derive(Debug, Clone)]
pub struct ParkStore {
    path: PathBuf,
    busy_timeout: Duration,
}

impl ParkStore {
    /// Creates a store for the database at `path`; nothing is opened yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Sets how long a statement waits on a locked database
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a read-only connection with the distance function registered.
    ///
    /// A missing file is an error; the catalog is never created here.
    pub fn connect(&self) -> SearchResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&self.path, flags)
            .map_err(|e| SearchError::storage("opening catalog", e))?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(|e| SearchError::storage("setting busy timeout", e))?;
        register_distance_function(&conn)
            .map_err(|e| SearchError::storage("registering distance function", e))?;

        let path = self.path.display().to_string();
        log_event_with_fields(Event::StoreOpened, &[("path", path.as_str())]);

        Ok(conn)
    }

    /// Counts parks and opening intervals
    pub fn stats(&self) -> SearchResult<CatalogStats> {
        let conn = self.connect()?;
        Ok(CatalogStats {
            parks: count_rows(&conn, PARKS_TABLE)?,
            intervals: count_rows(&conn, PARK_TIMES_TABLE)?,
        })
    }
}

impl ParkCatalog for ParkStore {
    fn fetch(&self, query: &ComposedQuery) -> SearchResult<Vec<ResultRecord>> {
        let conn = self.connect()?;
        execute(&conn, query)
    }
}

/// Catalog over a caller-owned connection
pub struct SessionCatalog<'c> {
    conn: &'c Connection,
}

impl<'c> SessionCatalog<'c> {
    /// Registers the distance function on `conn` and wraps it
    pub fn new(conn: &'c Connection) -> SearchResult<Self> {
        register_distance_function(conn)
            .map_err(|e| SearchError::storage("registering distance function", e))?;
        Ok(Self { conn })
    }
}

impl ParkCatalog for SessionCatalog<'_> {
    fn fetch(&self, query: &ComposedQuery) -> SearchResult<Vec<ResultRecord>> {
        execute(self.conn, query)
    }
}

/// Runs a composed statement on `conn` and collects all rows
pub fn execute(conn: &Connection, query: &ComposedQuery) -> SearchResult<Vec<ResultRecord>> {
    let mut stmt = conn
        .prepare(query.sql())
        .map_err(|e| SearchError::storage("preparing query", e))?;

    let has_distance = query.has_distance();
    let has_interval = query.has_interval();

    let rows = stmt
        .query_map(params_from_iter(query.params()), |row| {
            ResultRecord::from_row(row, has_distance, has_interval)
        })
        .map_err(|e| SearchError::storage("executing query", e))?;

    let records = rows
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| SearchError::storage("reading rows", e))?;

    if Logger::enabled(Severity::Trace) {
        let count = records.len().to_string();
        Logger::trace("ROWS_MATERIALIZED", &[("rows", count.as_str())]);
    }

    Ok(records)
}

fn count_rows(conn: &Connection, table: &str) -> SearchResult<u64> {
    // Table names are crate constants, never caller input
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let count: i64 = conn
        .query_row(&sql, [], |row| row.get(0))
        .map_err(|e| SearchError::storage("counting rows", e))?;
    Ok(count.max(0) as u64)
}
