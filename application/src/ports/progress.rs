//! Progress notification port
//!
//! Defines the interface for showing an "in progress" indicator while a
//! blocking network call is outstanding.

use content_request_domain::{DirectoryFetch, SubmissionResult};

/// Callback for progress updates
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait SubmissionProgress: Send + Sync {
    /// Called right before the webhook POST
    fn on_submit_start(&self, client_name: &str);

    /// Called once the POST resolved, whatever the outcome
    fn on_submit_complete(&self, result: &SubmissionResult);

    /// Called before the record store is queried
    fn on_directory_fetch_start(&self) {}

    /// Called after the record store query resolved
    fn on_directory_fetch_complete(&self, _fetch: &DirectoryFetch) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgress for NoProgress {
    fn on_submit_start(&self, _client_name: &str) {}
    fn on_submit_complete(&self, _result: &SubmissionResult) {}
}
