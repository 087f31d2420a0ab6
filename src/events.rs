use core::fmt;
use log::{info, warn};
use std::sync::{Arc, Mutex, PoisonError};

/// Status messages the search reports to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A step was requested before both endpoints were placed.
    EndpointsMissing,
    /// `length` counts the cells of the path including both endpoints.
    PathFound { length: usize, cost: i32 },
    NoPathFound,
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchEvent::EndpointsMissing => write!(f, "Please place start and end positions"),
            SearchEvent::PathFound { length, cost } => {
                write!(f, "Path found ({} cells, cost {})", length, cost)
            }
            SearchEvent::NoPathFound => write!(f, "No path was found"),
        }
    }
}

/// Receives [SearchEvent]s. How they are shown (on-screen text, toast, log) is up to the
/// implementation.
pub trait NotificationSink {
    fn notify(&mut self, event: &SearchEvent);
}

/// Default sink, forwards events to the [log] facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::PathFound { .. } => info!("{}", event),
            _ => warn!("{}", event),
        }
    }
}

/// Records events in order.
impl NotificationSink for Vec<SearchEvent> {
    fn notify(&mut self, event: &SearchEvent) {
        self.push(event.clone());
    }
}

/// Lets the caller keep a handle on a sink that the [PathFinder](crate::PathFinder) owns.
impl<S: NotificationSink> NotificationSink for Arc<Mutex<S>> {
    fn notify(&mut self, event: &SearchEvent) {
        // Still delivered if a holder of the lock panicked
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notify(event);
    }
}
