//! Park search entry point
//!
//! # Flow (strict order)
//!
//! 1. Validate every criterion; reject before composing anything
//! 2. Compose one parameterized statement
//! 3. Execute it on the catalog and materialize all rows
//!
//! No partial results are returned for a rejected request, and a store
//! failure is never retried.

use serde_json::Value;

use crate::composer::{ComposedQuery, ExplainPlan, QueryComposer};
use crate::criteria::SearchCriteria;
use crate::error::SearchResult;
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope, Severity};
use crate::store::{ParkCatalog, ResultRecord};

/// Runs searches against a catalog
pub struct ParkSearch<'a, C: ParkCatalog> {
    catalog: &'a C,
}

impl<'a, C: ParkCatalog> ParkSearch<'a, C> {
    /// Creates a search over `catalog`
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Returns every park matching all present criteria.
    ///
    /// Zero matches is an empty vector, not an error.
    pub fn search(&self, criteria: &SearchCriteria) -> SearchResult<Vec<ResultRecord>> {
        let keys = criteria.present_keys().join(",");
        let scope = ObservationScope::with_fields("SEARCH", &[("criteria", keys.as_str())]);

        let query = match compose_validated(criteria) {
            Ok(query) => query,
            Err(err) => {
                scope.reject(&err.to_string());
                return Err(err);
            }
        };

        match self.catalog.fetch(&query) {
            Ok(records) => {
                let rows = records.len().to_string();
                scope.complete_with_fields(&[("rows", rows.as_str())]);
                Ok(records)
            }
            Err(err) => {
                scope.fail(&err.to_string());
                Err(err)
            }
        }
    }

    /// Parses criteria from a JSON object and searches.
    pub fn search_json(&self, criteria: &Value) -> SearchResult<Vec<ResultRecord>> {
        let criteria = SearchCriteria::from_json(criteria).map_err(|err| {
            log_event_with_fields(Event::SearchRejected, &[("reason", err.to_string().as_str())]);
            err
        })?;
        self.search(&criteria)
    }
}

/// Validates `criteria` and composes its statement
pub fn compose_validated(criteria: &SearchCriteria) -> SearchResult<ComposedQuery> {
    criteria.validate()?;
    let query = QueryComposer::compose(criteria);

    let predicates = query.predicate_count().to_string();
    log_event_with_fields(
        Event::QueryComposed,
        &[
            ("distance", bool_field(query.has_distance())),
            ("intervals", bool_field(query.has_interval())),
            ("predicates", predicates.as_str()),
        ],
    );

    if Logger::enabled(Severity::Trace) {
        let params = serde_json::to_string(query.params()).unwrap_or_default();
        Logger::trace("QUERY_PARAMS", &[("sql", query.sql()), ("params", params.as_str())]);
    }

    Ok(query)
}

/// Explains what `criteria` would run without touching any store
pub fn explain(criteria: &SearchCriteria) -> ExplainPlan {
    let plan = match compose_validated(criteria) {
        Ok(query) => ExplainPlan::from_query(&query),
        Err(err) => ExplainPlan::from_error(&err),
    };
    log_event_with_fields(
        Event::ExplainComplete,
        &[("accepted", bool_field(plan.accepted))],
    );
    plan
}

fn bool_field(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
