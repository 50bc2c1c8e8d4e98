//! Observability for parksearch
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed search lifecycle events
//! - Scope-based begin/complete logging
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on search results
//! 3. No async or background threads
//! 4. Bound values are logged only at TRACE
//!
//! # Usage
//!
//! ```ignore
//! use parksearch::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::ConfigLoaded, &[("database_path", "data/parks.db")]);
//!
//! let scope = ObservationScope::new("SEARCH");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
