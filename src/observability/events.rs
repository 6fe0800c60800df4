//! Observability events for creatorview
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Dataset
    /// Dataset loaded from a source
    DatasetLoaded,
    /// Dataset failed validation or could not be read
    DatasetRejected,

    // View requests
    /// View request received
    ViewRequested,
    /// View model built
    ViewBuilt,
    /// Requested page was outside the valid range
    PageClamped,
    /// View request rejected
    ViewRejected,

    // Serving loop
    /// Serving loop ready for requests
    Serving,
    /// Serving loop reached end of input
    ServeComplete,
}

impl Event {
    /// Returns the event name as it appears in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetRejected => "DATASET_REJECTED",
            Event::ViewRequested => "VIEW_REQUESTED",
            Event::ViewBuilt => "VIEW_BUILT",
            Event::PageClamped => "PAGE_CLAMPED",
            Event::ViewRejected => "VIEW_REJECTED",
            Event::Serving => "SERVING",
            Event::ServeComplete => "SERVE_COMPLETE",
        }
    }

    /// Returns true for events that report a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Event::DatasetRejected | Event::ViewRejected)
    }

    /// Returns true for per-request events logged at TRACE
    pub fn is_per_request(&self) -> bool {
        matches!(
            self,
            Event::ViewRequested | Event::ViewBuilt | Event::PageClamped
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
