//! Submission parameters: how the webhook call is made.
//!
//! These are application-layer concerns, not domain policy: the domain only
//! knows a request is valid, not where or how it is sent.

use content_request_domain::DEFAULT_USER_AGENT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed per-call timeout for the webhook POST
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters for [`SubmitRequestUseCase`](crate::use_cases::submit_request::SubmitRequestUseCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionParams {
    /// Webhook URL for variants that do not ask for one.
    pub webhook_url: Option<String>,
    /// Timeout for the single POST attempt.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for SubmissionParams {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SubmissionParams {
    // ==================== Builder Methods ====================

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
