//! Criteria parsing from a JSON object
//!
//! Accepted shapes:
//!
//! ```text
//! {
//!   "name": "Yose",
//!   "query_terms": ["historic", "trail"],
//!   "zip_code": "95389",
//!   "open_at": ["mon", 1000],            time may also be "1000"
//!   "near": [37.8, -119.5, 50]
//! }
//! ```
//!
//! Unknown keys are rejected rather than ignored. Parsing checks shapes
//! only; range checks happen in `SearchCriteria::validate`.

use serde_json::{Map, Value};

use super::types::{Near, OpenAt, SearchCriteria, Weekday};
use crate::error::{SearchError, SearchResult};

impl SearchCriteria {
    /// Parses a criteria set from a JSON object, then validates it.
    pub fn from_json(value: &Value) -> SearchResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            SearchError::invalid_criteria("criteria", "expected a JSON object")
        })?;

        let criteria = parse_object(object)?;
        criteria.validate()?;
        Ok(criteria)
    }

    /// Parses a criteria set from JSON text.
    pub fn from_json_str(json: &str) -> SearchResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            SearchError::invalid_criteria("criteria", format!("invalid JSON: {}", e))
        })?;
        Self::from_json(&value)
    }
}

fn parse_object(object: &Map<String, Value>) -> SearchResult<SearchCriteria> {
    let mut criteria = SearchCriteria::new();

    for (key, value) in object {
        match key.as_str() {
            "name" => criteria.name = Some(expect_string(key, value)?),
            "zip_code" => criteria.zip_code = Some(expect_string(key, value)?),
            "query_terms" => criteria.query_terms = Some(parse_terms(value)?),
            "open_at" => criteria.open_at = Some(parse_open_at(value)?),
            "near" => criteria.near = Some(parse_near(value)?),
            other => {
                return Err(SearchError::invalid_criteria(
                    other,
                    "unknown criteria key",
                ))
            }
        }
    }

    Ok(criteria)
}

fn expect_string(key: &str, value: &Value) -> SearchResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| SearchError::invalid_criteria(key, format!("expected a string, got {}", kind(value))))
}

fn expect_tuple<'v>(key: &str, value: &'v Value, arity: usize) -> SearchResult<&'v [Value]> {
    let items = value.as_array().ok_or_else(|| {
        SearchError::invalid_criteria(
            key,
            format!("expected an array of {} elements, got {}", arity, kind(value)),
        )
    })?;
    if items.len() != arity {
        return Err(SearchError::invalid_criteria(
            key,
            format!("expected {} elements, got {}", arity, items.len()),
        ));
    }
    Ok(items)
}

fn parse_terms(value: &Value) -> SearchResult<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        SearchError::invalid_criteria(
            "query_terms",
            format!("expected an array of strings, got {}", kind(value)),
        )
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                SearchError::invalid_criteria(
                    "query_terms",
                    format!("term {} is {}, expected a string", i, kind(item)),
                )
            })
        })
        .collect()
}

fn parse_open_at(value: &Value) -> SearchResult<OpenAt> {
    let items = expect_tuple("open_at", value, 2)?;

    let code = items[0].as_str().ok_or_else(|| {
        SearchError::invalid_criteria(
            "open_at",
            format!("day must be a string, got {}", kind(&items[0])),
        )
    })?;
    let day = Weekday::from_code(code).ok_or_else(|| {
        SearchError::invalid_criteria(
            "open_at",
            format!("unknown day code '{}', expected one of mon..sun", code),
        )
    })?;

    let time = parse_time(&items[1])?;
    Ok(OpenAt::new(day, time))
}

/// Accepts 1000 or "1000"
fn parse_time(value: &Value) -> SearchResult<u16> {
    let raw = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) if !s.is_empty() && s.len() <= 4 && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<u64>().ok()
        }
        _ => None,
    };

    raw.and_then(|t| u16::try_from(t).ok()).ok_or_else(|| {
        SearchError::invalid_criteria(
            "open_at",
            format!("time must be an HHMM integer, got {}", value),
        )
    })
}

fn parse_near(value: &Value) -> SearchResult<Near> {
    let items = expect_tuple("near", value, 3)?;

    let mut numbers = [0.0f64; 3];
    for (slot, (item, label)) in numbers
        .iter_mut()
        .zip(items.iter().zip(["latitude", "longitude", "max distance"]))
    {
        *slot = item.as_f64().ok_or_else(|| {
            SearchError::invalid_criteria(
                "near",
                format!("{} must be a number, got {}", label, kind(item)),
            )
        })?;
    }

    Ok(Near::new(numbers[0], numbers[1], numbers[2]))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
