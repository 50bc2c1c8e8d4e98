//! SELECT statement accumulator
//!
//! Collects projection fragments, joins, and predicate fragments, each
//! carrying the parameters for its own placeholders, and finalizes them
//! into one statement. Parameters are emitted in placeholder order:
//! projection, then predicates.

use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use serde::Serialize;

/// Escape character used in every LIKE pattern built here
pub const LIKE_ESCAPE: char = '\\';

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlParam::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            SqlParam::Integer(i) => ToSqlOutput::Owned(SqlValue::Integer(*i)),
            SqlParam::Real(f) => ToSqlOutput::Owned(SqlValue::Real(*f)),
        })
    }
}

impl From<String> for SqlParam {
    fn from(s: String) -> Self {
        SqlParam::Text(s)
    }
}

impl From<&str> for SqlParam {
    fn from(s: &str) -> Self {
        SqlParam::Text(s.to_string())
    }
}

impl From<i64> for SqlParam {
    fn from(i: i64) -> Self {
        SqlParam::Integer(i)
    }
}

impl From<f64> for SqlParam {
    fn from(f: f64) -> Self {
        SqlParam::Real(f)
    }
}

/// SQL text with the parameters for its placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Fragment {
    /// Fragment without placeholders
    pub fn text(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Fragment whose placeholders are filled by `params`, in order
    pub fn bound(sql: impl Into<String>, params: Vec<SqlParam>) -> Self {
        let fragment = Self {
            sql: sql.into(),
            params,
        };
        debug_assert_eq!(
            fragment.sql.matches('?').count(),
            fragment.params.len(),
            "placeholder count mismatch in `{}`",
            fragment.sql
        );
        fragment
    }
}

/// Escapes LIKE metacharacters so `value` matches literally
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Builder for a single SELECT statement
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    projection: Vec<Fragment>,
    source: String,
    joins: Vec<String>,
    predicates: Vec<Fragment>,
}

impl SelectBuilder {
    /// Starts a statement reading from `source` (e.g. `parks AS p`)
    pub fn from(source: impl Into<String>) -> Self {
        Self {
            projection: Vec::new(),
            source: source.into(),
            joins: Vec::new(),
            predicates: Vec::new(),
        }
    }

    /// Appends a projected column or expression
    pub fn project(&mut self, fragment: Fragment) -> &mut Self {
        self.projection.push(fragment);
        self
    }

    /// Appends several placeholder-free columns
    pub fn project_columns(&mut self, columns: &[&str]) -> &mut Self {
        for column in columns {
            self.projection.push(Fragment::text(*column));
        }
        self
    }

    /// Appends an inner join clause (without the leading `JOIN`)
    pub fn join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.joins.push(clause.into());
        self
    }

    /// Appends a conjunct to the WHERE clause
    pub fn filter(&mut self, fragment: Fragment) -> &mut Self {
        self.predicates.push(fragment);
        self
    }

    /// Appends `column LIKE ? ESCAPE '\'` bound to `pattern`
    pub fn filter_like(&mut self, column: &str, pattern: String) -> &mut Self {
        self.filter(Fragment::bound(
            format!("{} LIKE ? ESCAPE '{}'", column, LIKE_ESCAPE),
            vec![SqlParam::Text(pattern)],
        ))
    }

    /// Number of conjuncts added so far
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Renders the statement and its parameters.
    ///
    /// With no predicates there is no WHERE clause at all.
    pub fn build(&self) -> (String, Vec<SqlParam>) {
        let mut sql = String::from("SELECT ");
        let mut params = Vec::new();

        let columns: Vec<&str> = self.projection.iter().map(|f| f.sql.as_str()).collect();
        sql.push_str(&columns.join(", "));
        for fragment in &self.projection {
            params.extend(fragment.params.iter().cloned());
        }

        sql.push_str(" FROM ");
        sql.push_str(&self.source);

        for join in &self.joins {
            sql.push_str(" JOIN ");
            sql.push_str(join);
        }

        if !self.predicates.is_empty() {
            let conjuncts: Vec<&str> = self.predicates.iter().map(|f| f.sql.as_str()).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&conjuncts.join(" AND "));
            for fragment in &self.predicates {
                params.extend(fragment.params.iter().cloned());
            }
        }

        (sql, params)
    }
}
