//! Great-circle distance for proximity search
//!
//! The distance function is evaluated inside SQL predicates, so it is
//! registered on each connection as the scalar function
//! `haversine_distance(lat1, lon1, lat2, lon2)`.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// Name under which the distance function is visible to SQL
pub const DISTANCE_FUNCTION: &str = "haversine_distance";

/// Distance in miles between two points given in degrees.
///
/// Uses the `atan2` form of the haversine formula.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Registers `haversine_distance` on a single connection.
///
/// Registration does not outlive the connection; every new connection
/// must be registered again.
pub fn register_distance_function(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        DISTANCE_FUNCTION,
        4,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let lat1: f64 = ctx.get(0)?;
            let lon1: f64 = ctx.get(1)?;
            let lat2: f64 = ctx.get(2)?;
            let lon2: f64 = ctx.get(3)?;
            Ok(haversine_distance(lat1, lon1, lat2, lon2))
        },
    )
}
