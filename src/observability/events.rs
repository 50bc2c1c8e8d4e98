//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in a park search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Store
    /// Catalog connection opened and functions registered
    StoreOpened,

    // Search
    //
    // SEARCH_BEGIN, SEARCH_COMPLETE and SEARCH_FAILED come from the
    // search's ObservationScope.
    /// Statement composed from criteria
    QueryComposed,
    /// Criteria JSON could not be parsed into a criteria set
    SearchRejected,

    // Explain
    /// Explain produced
    ExplainComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::QueryComposed => "QUERY_COMPOSED",
            Event::SearchRejected => "SEARCH_REJECTED",
            Event::ExplainComplete => "EXPLAIN_COMPLETE",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::SearchRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::StoreOpened,
            Event::QueryComposed,
            Event::SearchRejected,
            Event::ExplainComplete,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_failure_events() {
        assert!(Event::SearchRejected.is_failure());
        assert!(!Event::QueryComposed.is_failure());
        assert!(!Event::StoreOpened.is_failure());
    }

    /// Scope-generated names stay out of the enum so each event has one source
    #[test]
    fn test_no_scope_lifecycle_names() {
        let events = [
            Event::ConfigLoaded,
            Event::StoreOpened,
            Event::QueryComposed,
            Event::SearchRejected,
            Event::ExplainComplete,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.ends_with("_BEGIN"), "{}", s);
            assert!(!s.ends_with("_FAILED"), "{}", s);
            assert!(!s.ends_with("_INCOMPLETE"), "{}", s);
            assert_ne!(s, "SEARCH_COMPLETE");
        }
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::QueryComposed), "QUERY_COMPOSED");
    }
}
