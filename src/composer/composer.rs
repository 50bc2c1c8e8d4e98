//! Query composition for park searches
//!
//! The statement shape depends on which criteria are present:
//!
//! - `near` adds a `haversine_distance(...) AS distance` projection
//! - `open_at` joins `park_times` and projects day, open and close time
//! - every present criterion adds one conjunct (one per term for
//!   `query_terms`), in the order name, query_terms, zip_code, open_at, near
//!
//! Composition is deterministic: the same criteria always yield the same
//! SQL text and parameters. Every criteria value is a bound parameter.

use super::builder::{escape_like, Fragment, SelectBuilder, SqlParam};
use crate::criteria::SearchCriteria;
use crate::geo::DISTANCE_FUNCTION;

/// Catalog table holding one row per park
pub const PARKS_TABLE: &str = "parks";

/// Catalog table holding opening intervals
pub const PARK_TIMES_TABLE: &str = "park_times";

/// Park attributes every result carries
pub const BASE_COLUMNS: [&str; 5] = ["p.name", "p.address", "p.description", "p.history", "p.url"];

/// Interval attributes carried when `open_at` is present
pub const INTERVAL_COLUMNS: [&str; 3] = ["t.day", "t.open_time", "t.close_time"];

/// A composed, ready-to-execute statement
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedQuery {
    sql: String,
    params: Vec<SqlParam>,
    has_distance: bool,
    has_interval: bool,
    predicate_count: usize,
}

impl ComposedQuery {
    /// Statement text; contains only `?` placeholders, never values
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameters in placeholder order
    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// True if rows carry a `distance` column
    pub fn has_distance(&self) -> bool {
        self.has_distance
    }

    /// True if rows carry `day`, `open_time` and `close_time` columns
    pub fn has_interval(&self) -> bool {
        self.has_interval
    }

    /// Number of conjuncts in the WHERE clause
    pub fn predicate_count(&self) -> usize {
        self.predicate_count
    }
}

/// Composes criteria into a single parameterized statement
pub struct QueryComposer;

impl QueryComposer {
    /// Composes `criteria` into a statement.
    ///
    /// Criteria must already be validated; composition itself cannot fail.
    pub fn compose(criteria: &SearchCriteria) -> ComposedQuery {
        let mut builder = SelectBuilder::from(format!("{} AS p", PARKS_TABLE));

        // 1. Projection
        if let Some(near) = &criteria.near {
            builder.project(Fragment::bound(
                format!(
                    "{}(?, ?, p.latitude, p.longitude) AS distance",
                    DISTANCE_FUNCTION
                ),
                vec![near.latitude.into(), near.longitude.into()],
            ));
        }
        builder.project_columns(&BASE_COLUMNS);

        // 2. Source
        if criteria.open_at.is_some() {
            builder
                .project_columns(&INTERVAL_COLUMNS)
                .join(format!("{} AS t ON p.id = t.park_id", PARK_TIMES_TABLE));
        }

        // 3. Predicates
        if let Some(prefix) = &criteria.name {
            builder.filter_like("p.name", format!("{}%", escape_like(prefix)));
        }

        if let Some(terms) = &criteria.query_terms {
            for term in terms {
                builder.filter_like("p.tokens", format!("% {} %", escape_like(term)));
            }
        }

        if let Some(zip) = &criteria.zip_code {
            builder.filter_like("p.address", format!("%{}%", escape_like(zip)));
        }

        if let Some(open_at) = &criteria.open_at {
            let time = i64::from(open_at.time);
            builder.filter(Fragment::bound(
                "(t.day = ? AND CAST(t.open_time AS INTEGER) <= ? AND CAST(t.close_time AS INTEGER) >= ?)",
                vec![open_at.day.code().into(), time.into(), time.into()],
            ));
        }

        if let Some(near) = &criteria.near {
            builder.filter(Fragment::bound(
                "distance <= ?",
                vec![near.max_distance.into()],
            ));
        }

        let predicate_count = builder.predicate_count();
        let (sql, params) = builder.build();

        ComposedQuery {
            sql,
            params,
            has_distance: criteria.near.is_some(),
            has_interval: criteria.open_at.is_some(),
            predicate_count,
        }
    }
}
