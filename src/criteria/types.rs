//! Search criteria structures
//!
//! Every dimension is optional; an absent dimension does not filter.

use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};

/// Criteria keys, in the order predicates are composed
pub const CRITERIA_KEYS: [&str; 5] = ["name", "query_terms", "zip_code", "open_at", "near"];

/// Latest valid HHMM time of day
pub const MAX_TIME: u16 = 2359;

/// Day of the week as stored in `park_times.day`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Three-letter code used by the catalog
    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }

    /// Parses a three-letter code, ignoring ASCII case
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromSql for Weekday {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_str()?;
        Weekday::from_code(code).ok_or(FromSqlError::InvalidType)
    }
}

/// "Open at" filter: the park must have an interval on `day` bracketing `time`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenAt {
    pub day: Weekday,
    /// HHMM, e.g. 930 for 09:30
    pub time: u16,
}

impl OpenAt {
    pub fn new(day: Weekday, time: u16) -> Self {
        Self { day, time }
    }
}

/// Proximity filter: within `max_distance` miles of (`latitude`, `longitude`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Near {
    pub latitude: f64,
    pub longitude: f64,
    pub max_distance: f64,
}

impl Near {
    pub fn new(latitude: f64, longitude: f64, max_distance: f64) -> Self {
        Self {
            latitude,
            longitude,
            max_distance,
        }
    }
}

/// A set of optional search criteria (all present criteria combined with AND)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Case-insensitive name prefix
    pub name: Option<String>,
    /// Whole-word terms that must all appear in the park's tokens
    pub query_terms: Option<Vec<String>>,
    /// Fragment that must appear somewhere in the address
    pub zip_code: Option<String>,
    pub open_at: Option<OpenAt>,
    pub near: Option<Near>,
}

impl SearchCriteria {
    /// Creates an empty criteria set (matches every park)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, prefix: impl Into<String>) -> Self {
        self.name = Some(prefix.into());
        self
    }

    pub fn with_query_terms(mut self, terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.query_terms = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_zip_code(mut self, zip: impl Into<String>) -> Self {
        self.zip_code = Some(zip.into());
        self
    }

    pub fn open_at(mut self, day: Weekday, time: u16) -> Self {
        self.open_at = Some(OpenAt::new(day, time));
        self
    }

    pub fn near(mut self, latitude: f64, longitude: f64, max_distance: f64) -> Self {
        self.near = Some(Near::new(latitude, longitude, max_distance));
        self
    }

    /// Returns true if no criteria are present
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.query_terms.is_none()
            && self.zip_code.is_none()
            && self.open_at.is_none()
            && self.near.is_none()
    }

    /// Keys present in this criteria set, in composition order
    pub fn present_keys(&self) -> Vec<&'static str> {
        let present = [
            self.name.is_some(),
            self.query_terms.is_some(),
            self.zip_code.is_some(),
            self.open_at.is_some(),
            self.near.is_some(),
        ];
        CRITERIA_KEYS
            .iter()
            .zip(present)
            .filter(|(_, p)| *p)
            .map(|(k, _)| *k)
            .collect()
    }

    /// Checks every present value against its documented constraints.
    ///
    /// Keys are checked in composition order and the first violation is
    /// returned.
    pub fn validate(&self) -> SearchResult<()> {
        if let Some(terms) = &self.query_terms {
            for (i, term) in terms.iter().enumerate() {
                if term.trim().is_empty() {
                    return Err(SearchError::invalid_criteria(
                        "query_terms",
                        format!("term {} is empty", i),
                    ));
                }
            }
        }

        if let Some(open_at) = &self.open_at {
            validate_time(open_at.time)?;
        }

        if let Some(near) = &self.near {
            validate_near(near)?;
        }

        Ok(())
    }
}

fn validate_time(time: u16) -> SearchResult<()> {
    if time > MAX_TIME {
        return Err(SearchError::invalid_criteria(
            "open_at",
            format!("time {:04} is outside 0000-2359", time),
        ));
    }
    if time % 100 > 59 {
        return Err(SearchError::invalid_criteria(
            "open_at",
            format!("time {:04} has minutes above 59", time),
        ));
    }
    Ok(())
}

fn validate_near(near: &Near) -> SearchResult<()> {
    if !near.latitude.is_finite() || !(-90.0..=90.0).contains(&near.latitude) {
        return Err(SearchError::invalid_criteria(
            "near",
            format!("latitude {} is outside -90..90", near.latitude),
        ));
    }
    if !near.longitude.is_finite() || !(-180.0..=180.0).contains(&near.longitude) {
        return Err(SearchError::invalid_criteria(
            "near",
            format!("longitude {} is outside -180..180", near.longitude),
        ));
    }
    if !near.max_distance.is_finite() || near.max_distance < 0.0 {
        return Err(SearchError::invalid_criteria(
            "near",
            format!("max distance {} must be a non-negative number", near.max_distance),
        ));
    }
    Ok(())
}
