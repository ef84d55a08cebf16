//! Port for structured submission logging.
//!
//! Defines the [`SubmissionLogger`] trait for recording submission events
//! (attempts, outcomes, directory loads) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL). Request bodies are never
//! part of an event.

use serde_json::Value;

/// A structured submission event for logging.
pub struct SubmissionEvent {
    /// Event type identifier (e.g., "submission_started", "directory_loaded").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SubmissionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging submission events.
///
/// The `log` method is synchronous and non-fallible; logging failures never
/// affect the submission itself.
pub trait SubmissionLogger: Send + Sync {
    /// Record a submission event.
    fn log(&self, event: SubmissionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSubmissionLogger;

impl SubmissionLogger for NoSubmissionLogger {
    fn log(&self, _event: SubmissionEvent) {}
}
