//! parksearch - Parameterized search over a catalog of public parks
//!
//! Criteria are validated, composed into one SQL statement with bound
//! parameters, and executed against a read-only SQLite catalog. Distances
//! come from a `haversine_distance` function registered on each connection.

pub mod cli;
pub mod composer;
pub mod criteria;
pub mod error;
pub mod geo;
pub mod observability;
pub mod search;
pub mod store;

pub use criteria::{Near, OpenAt, SearchCriteria, Weekday};
pub use error::{SearchError, SearchResult};
pub use search::ParkSearch;
pub use store::{ParkCatalog, ParkStore, ResultRecord};
