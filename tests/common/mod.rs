//! Shared fixture catalog for integration tests
//!
//! | id | name               | zip   | tokens                          |
//! |----|--------------------|-------|---------------------------------|
//! | 1  | Yosemite           | 95389 | granite historic trail valley   |
//! | 2  | yosemite Falls     | 95389 | falls historical trail          |
//! | 3  | Historic Mill Park | 95327 | historical mill                 |
//! | 4  | Zion               | 84767 | canyon historic trail river     |
//! | 5  | Yo%do Park         | 89501 | desert                          |
//!
//! Monday intervals covering 1000: two for Yosemite, one for Zion.

#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

pub const SCHEMA: &str = "
    CREATE TABLE parks (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        description TEXT NOT NULL,
        history TEXT NOT NULL,
        url TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        tokens TEXT NOT NULL
    );
    CREATE TABLE park_times (
        park_id INTEGER NOT NULL REFERENCES parks(id),
        day TEXT NOT NULL,
        open_time INTEGER NOT NULL,
        close_time INTEGER NOT NULL
    );
";

const ROWS: &str = "
    INSERT INTO parks VALUES (1, 'Yosemite', 'Yosemite Valley, CA 95389',
        'Granite cliffs and waterfalls', 'Protected in 1864', 'https://example.org/yose',
        37.8651, -119.5383, ' granite historic trail valley ');
    INSERT INTO parks VALUES (2, 'yosemite Falls', 'Wawona, CA 95389',
        'Tallest falls in the valley', 'Mapped in 1851', 'https://example.org/falls',
        37.7167, -119.6500, ' falls historical trail ');
    INSERT INTO parks VALUES (3, 'Historic Mill Park', 'Jamestown, CA 95327',
        'Restored stamp mill', 'Built in 1897', 'https://example.org/mill',
        38.0000, -121.0000, ' historical mill ');
    INSERT INTO parks VALUES (4, 'Zion', 'Springdale, UT 84767',
        'Sandstone canyon', 'Established 1919', 'https://example.org/zion',
        37.2982, -113.0263, ' canyon historic trail river ');
    INSERT INTO parks VALUES (5, 'Yo%do Park', 'Reno, NV 89501',
        'High desert flats', 'Opened 1962', 'https://example.org/yodo',
        39.5000, -119.8000, ' desert ');

    INSERT INTO park_times VALUES (1, 'mon', 800, 1200);
    INSERT INTO park_times VALUES (1, 'mon', 900, 1700);
    INSERT INTO park_times VALUES (1, 'tue', 800, 1700);
    INSERT INTO park_times VALUES (2, 'mon', 1100, 1800);
    INSERT INTO park_times VALUES (4, 'mon', 600, 2000);
    INSERT INTO park_times VALUES (4, 'sun', 0, 2359);
";

/// Creates the populated fixture catalog inside `dir`
pub fn create_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("parks.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute_batch(ROWS).unwrap();
    path
}

/// Creates a catalog with both tables and no rows
pub fn create_empty_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("empty.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch(SCHEMA)
        .unwrap();
    path
}

/// Sorted names of the given records
pub fn names(records: &[parksearch::ResultRecord]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
    names.sort();
    names
}
