//! Explain output for composed searches
//!
//! Renders the statement a search would run, without touching the store.

use std::fmt;

use serde::Serialize;

use super::builder::SqlParam;
use super::composer::ComposedQuery;
use crate::error::SearchError;

/// Explain plan output
#[derive(Debug, Clone, Serialize)]
pub struct ExplainPlan {
    /// Whether the criteria were accepted
    pub accepted: bool,
    /// Statement text (if accepted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    /// Bound parameters in placeholder order
    pub params: Vec<SqlParam>,
    /// Whether results carry a distance
    pub projects_distance: bool,
    /// Whether opening intervals are joined in
    pub joins_intervals: bool,
    /// Number of WHERE conjuncts
    pub predicate_count: usize,
    /// Rejection code (if rejected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_code: Option<String>,
    /// Rejection reason (if rejected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl ExplainPlan {
    /// Creates an explain plan from a composed query
    pub fn from_query(query: &ComposedQuery) -> Self {
        Self {
            accepted: true,
            sql: Some(query.sql().to_string()),
            params: query.params().to_vec(),
            projects_distance: query.has_distance(),
            joins_intervals: query.has_interval(),
            predicate_count: query.predicate_count(),
            rejection_code: None,
            rejection_reason: None,
        }
    }

    /// Creates an explain plan from a rejected request
    pub fn from_error(err: &SearchError) -> Self {
        Self {
            accepted: false,
            sql: None,
            params: Vec::new(),
            projects_distance: false,
            joins_intervals: false,
            predicate_count: 0,
            rejection_code: Some(err.code().to_string()),
            rejection_reason: Some(err.to_string()),
        }
    }
}

impl fmt::Display for ExplainPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLAIN SEARCH ===")?;

        if self.accepted {
            writeln!(f, "Status: ACCEPTED")?;
            if let Some(sql) = &self.sql {
                writeln!(f, "SQL: {}", sql)?;
            }
            if !self.params.is_empty() {
                writeln!(f, "Parameters:")?;
                for (i, param) in self.params.iter().enumerate() {
                    writeln!(f, "  ?{} = {:?}", i + 1, param)?;
                }
            }
            writeln!(f, "Distance: {}", if self.projects_distance { "yes" } else { "no" })?;
            writeln!(f, "Intervals: {}", if self.joins_intervals { "joined" } else { "no" })?;
            writeln!(f, "Predicates: {}", self.predicate_count)?;
        } else {
            writeln!(f, "Status: REJECTED")?;
            if let Some(code) = &self.rejection_code {
                writeln!(f, "Error Code: {}", code)?;
            }
            if let Some(reason) = &self.rejection_reason {
                writeln!(f, "Reason: {}", reason)?;
            }
        }

        Ok(())
    }
}
