//! Search Property Tests
//!
//! End-to-end searches against a fixture SQLite catalog:
//! - Empty criteria return every park exactly once
//! - Name matches are case-insensitive prefixes
//! - Query terms match whole tokens only
//! - open_at yields one record per matching interval
//! - near filters by computed distance and ANDs with other criteria
//! - Unknown keys are rejected before the store is touched

mod common;

use common::{create_catalog, create_empty_catalog, names};
use parksearch::geo::haversine_distance;
use parksearch::{ParkSearch, ParkStore, SearchCriteria, Weekday};
use rusqlite::Connection;
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store() -> (TempDir, ParkStore) {
    let tmp = TempDir::new().unwrap();
    let store = ParkStore::new(create_catalog(&tmp));
    (tmp, store)
}

// =============================================================================
// Empty Criteria
// =============================================================================

/// Every park comes back once, with no optional fields.
#[test]
fn test_empty_criteria_returns_every_park_once() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search(&SearchCriteria::new())
        .unwrap();

    assert_eq!(
        names(&records),
        vec!["Historic Mill Park", "Yo%do Park", "Yosemite", "Zion", "yosemite Falls"]
    );
    for record in &records {
        assert!(record.distance.is_none());
        assert!(record.interval.is_none());
    }
}

/// An empty store yields an empty sequence, not an error.
#[test]
fn test_empty_store_returns_empty_sequence() {
    let tmp = TempDir::new().unwrap();
    let store = ParkStore::new(create_empty_catalog(&tmp));

    let records = ParkSearch::new(&store).search_json(&json!({})).unwrap();
    assert!(records.is_empty());
}

// =============================================================================
// Text Predicates
// =============================================================================

#[test]
fn test_name_prefix_is_case_insensitive() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search_json(&json!({"name": "Yose"}))
        .unwrap();

    assert_eq!(names(&records), vec!["Yosemite", "yosemite Falls"]);
}

#[test]
fn test_name_prefix_not_substring() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search_json(&json!({"name": "Mill"}))
        .unwrap();

    assert!(records.is_empty());
}

/// Wildcard characters in a prefix are matched literally.
#[test]
fn test_name_wildcards_are_literal() {
    let (_tmp, store) = setup_store();
    let search = ParkSearch::new(&store);

    let records = search.search_json(&json!({"name": "Yo%"})).unwrap();
    assert_eq!(names(&records), vec!["Yo%do Park"]);

    let records = search.search_json(&json!({"name": "_"})).unwrap();
    assert!(records.is_empty());
}

/// "historical" must not satisfy "historic".
#[test]
fn test_query_terms_match_whole_tokens() {
    let (_tmp, store) = setup_store();
    let search = ParkSearch::new(&store);

    let records = search
        .search_json(&json!({"query_terms": ["historic", "trail"]}))
        .unwrap();
    assert_eq!(names(&records), vec!["Yosemite", "Zion"]);

    let records = search
        .search_json(&json!({"query_terms": ["historic"]}))
        .unwrap();
    assert_eq!(names(&records), vec!["Yosemite", "Zion"]);

    let records = search
        .search_json(&json!({"query_terms": ["historical"]}))
        .unwrap();
    assert_eq!(names(&records), vec!["Historic Mill Park", "yosemite Falls"]);
}

#[test]
fn test_empty_term_list_matches_everything() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search_json(&json!({"query_terms": []}))
        .unwrap();

    assert_eq!(records.len(), 5);
}

#[test]
fn test_zip_code_substring() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search(&SearchCriteria::new().with_zip_code("95389"))
        .unwrap();

    assert_eq!(names(&records), vec!["Yosemite", "yosemite Falls"]);
}

// =============================================================================
// Opening Intervals
// =============================================================================

/// A park with two qualifying Monday intervals yields two records.
#[test]
fn test_open_at_returns_one_record_per_interval() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search_json(&json!({"open_at": ["mon", 1000]}))
        .unwrap();

    assert_eq!(names(&records), vec!["Yosemite", "Yosemite", "Zion"]);
    for record in &records {
        let interval = record.interval.as_ref().unwrap();
        assert_eq!(interval.day, Weekday::Mon);
        assert!(interval.open_time <= 1000 && 1000 <= interval.close_time);
    }
}

#[test]
fn test_open_at_bounds_are_inclusive() {
    let (_tmp, store) = setup_store();
    let search = ParkSearch::new(&store);

    let records = search
        .search(&SearchCriteria::new().open_at(Weekday::Sun, 0))
        .unwrap();
    assert_eq!(names(&records), vec!["Zion"]);

    let records = search
        .search(&SearchCriteria::new().open_at(Weekday::Mon, 1800))
        .unwrap();
    assert_eq!(names(&records), vec!["Zion", "yosemite Falls"]);
}

#[test]
fn test_open_at_day_without_intervals() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search(&SearchCriteria::new().open_at(Weekday::Wed, 1200))
        .unwrap();

    assert!(records.is_empty());
}

// =============================================================================
// Distance
// =============================================================================

#[test]
fn test_near_filters_by_distance() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search_json(&json!({"near": [37.8, -119.5, 50]}))
        .unwrap();

    assert_eq!(names(&records), vec!["Yosemite", "yosemite Falls"]);
    for record in &records {
        let distance = record.distance.unwrap();
        assert!(distance <= 50.0);
        assert!(distance > 0.0);
    }
}

/// The reported distance is the one the Rust function computes.
#[test]
fn test_near_distance_matches_function() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search(&SearchCriteria::new().with_name("Yosemite").near(37.8, -119.5, 50.0))
        .unwrap();

    let yosemite = records.iter().find(|r| r.name == "Yosemite").unwrap();
    let expected = haversine_distance(37.8, -119.5, 37.8651, -119.5383);
    assert!((yosemite.distance.unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_near_and_name_are_conjoined() {
    let (_tmp, store) = setup_store();
    let search = ParkSearch::new(&store);

    let records = search
        .search_json(&json!({"name": "yosemite F", "near": [37.8, -119.5, 50]}))
        .unwrap();
    assert_eq!(names(&records), vec!["yosemite Falls"]);

    let records = search
        .search_json(&json!({"name": "Zion", "near": [37.8, -119.5, 50]}))
        .unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_zero_radius_excludes_everything_else() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search(&SearchCriteria::new().near(37.2982, -113.0263, 0.0))
        .unwrap();

    assert_eq!(names(&records), vec!["Zion"]);
    assert_eq!(records[0].distance, Some(0.0));
}

#[test]
fn test_all_criteria_combined() {
    let (_tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search_json(&json!({
            "name": "Yose",
            "query_terms": ["trail"],
            "zip_code": "95389",
            "open_at": ["mon", 1000],
            "near": [37.8, -119.5, 50]
        }))
        .unwrap();

    assert_eq!(names(&records), vec!["Yosemite", "Yosemite"]);
    for record in &records {
        assert!(record.distance.is_some());
        assert!(record.interval.is_some());
    }
}

// =============================================================================
// Rejection and Safety
// =============================================================================

#[test]
fn test_unknown_key_is_rejected() {
    let (_tmp, store) = setup_store();
    let err = ParkSearch::new(&store)
        .search_json(&json!({"state": "CA"}))
        .unwrap_err();

    assert_eq!(err.code(), "PARKS_INVALID_CRITERIA");
    assert_eq!(err.key(), Some("state"));
    assert!(err.to_string().contains("state"));
}

/// Hostile input is bound, so it neither matches nor alters the catalog.
#[test]
fn test_hostile_name_is_inert() {
    let (tmp, store) = setup_store();
    let records = ParkSearch::new(&store)
        .search_json(&json!({"name": "'; DROP TABLE parks; --"}))
        .unwrap();
    assert!(records.is_empty());

    let conn = Connection::open(tmp.path().join("parks.db")).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM parks", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 5);
}

#[test]
fn test_missing_catalog_is_storage_error() {
    let tmp = TempDir::new().unwrap();
    let store = ParkStore::new(tmp.path().join("absent.db"));

    let err = ParkSearch::new(&store)
        .search(&SearchCriteria::new())
        .unwrap_err();
    assert_eq!(err.code(), "PARKS_STORAGE_ERROR");
    assert!(!err.is_client_error());
}

/// Repeated searches on the same store see the same rows.
#[test]
fn test_search_is_repeatable() {
    let (_tmp, store) = setup_store();
    let search = ParkSearch::new(&store);
    let criteria = SearchCriteria::new().with_query_terms(["trail"]);

    let first = search.search(&criteria).unwrap();
    for _ in 0..10 {
        assert_eq!(search.search(&criteria).unwrap(), first);
    }
}
