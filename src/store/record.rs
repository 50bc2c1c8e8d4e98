//! Result types for park searches

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use rusqlite::Row;
use serde::Serialize;

use crate::criteria::Weekday;

/// Opening interval that matched an `open_at` search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalMatch {
    pub day: Weekday,
    pub open_time: u16,
    pub close_time: u16,
}

/// HHMM time read from `park_times`, stored either as an integer or as
/// 1-4 digit text such as `"0930"`
struct ClockTime(u16);

impl FromSql for ClockTime {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = match value {
            ValueRef::Integer(i) => i,
            ValueRef::Text(_) => {
                let text = value.as_str()?.trim();
                if text.is_empty() || text.len() > 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(FromSqlError::InvalidType);
                }
                text.parse::<i64>()
                    .map_err(|e| FromSqlError::Other(Box::new(e)))?
            }
            _ => return Err(FromSqlError::InvalidType),
        };
        u16::try_from(raw)
            .map(ClockTime)
            .map_err(|_| FromSqlError::OutOfRange(raw))
    }
}

/// One matching row.
///
/// `distance` is present iff the search had `near`; `interval` is present
/// iff it had `open_at`, in which case a park appears once per matching
/// interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub name: String,
    pub address: String,
    pub description: String,
    pub history: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(flatten)]
    pub interval: Option<IntervalMatch>,
}

impl ResultRecord {
    /// Maps a row by column name; optional columns are read only when the
    /// statement projected them
    pub(crate) fn from_row(
        row: &Row<'_>,
        has_distance: bool,
        has_interval: bool,
    ) -> rusqlite::Result<Self> {
        let distance = if has_distance {
            Some(row.get("distance")?)
        } else {
            None
        };

        let interval = if has_interval {
            Some(IntervalMatch {
                day: row.get("day")?,
                open_time: row.get::<_, ClockTime>("open_time")?.0,
                close_time: row.get::<_, ClockTime>("close_time")?.0,
            })
        } else {
            None
        };

        Ok(Self {
            name: row.get("name")?,
            address: row.get("address")?,
            description: row.get("description")?,
            history: row.get("history")?,
            url: row.get("url")?,
            distance,
            interval,
        })
    }
}
