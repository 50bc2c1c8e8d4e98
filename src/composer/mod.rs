//! Query composition subsystem
//!
//! Turns a validated criteria set into one parameterized SELECT against
//! the park catalog.
//!
//! # Statement shape
//!
//! - Projection: base park attributes, plus `distance` when proximity is
//!   requested and interval columns when opening hours are requested
//! - Source: `parks`, joined to `park_times` only for opening hours
//! - Predicates: one conjunct per present criterion joined with AND; an
//!   empty criteria set produces no WHERE clause
//!
//! Values are only ever bound as parameters.

mod builder;
mod composer;
mod explain;

pub use builder::{escape_like, Fragment, SelectBuilder, SqlParam, LIKE_ESCAPE};
pub use composer::{
    ComposedQuery, QueryComposer, BASE_COLUMNS, INTERVAL_COLUMNS, PARKS_TABLE, PARK_TIMES_TABLE,
};
pub use explain::ExplainPlan;
