//! Webhook configuration from TOML (`[webhook]` section)

use content_request_application::{DEFAULT_TIMEOUT, SubmissionParams};
use content_request_domain::DEFAULT_USER_AGENT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw webhook configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebhookConfig {
    /// Fixed webhook URL (static and remote variants)
    pub url: Option<String>,
    /// Timeout for the POST in seconds
    pub timeout_secs: u64,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for FileWebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FileWebhookConfig {
    /// Configured timeout; 0 falls back to the default
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }

    /// Convert to application-layer [`SubmissionParams`]
    pub fn to_submission_params(&self) -> SubmissionParams {
        let params = SubmissionParams::default()
            .with_timeout(self.timeout())
            .with_user_agent(self.user_agent.clone());
        match self.url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => params.with_webhook_url(url),
            None => params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = FileWebhookConfig {
            timeout_secs: 0,
            ..FileWebhookConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_empty_url_is_not_used() {
        let config = FileWebhookConfig {
            url: Some(String::new()),
            ..FileWebhookConfig::default()
        };
        assert!(config.to_submission_params().webhook_url.is_none());
    }

    #[test]
    fn test_to_submission_params() {
        let config = FileWebhookConfig {
            url: Some("https://hooks.example.com/x".to_string()),
            timeout_secs: 10,
            user_agent: "Agent/2".to_string(),
        };
        let params = config.to_submission_params();
        assert_eq!(params.webhook_url.as_deref(), Some("https://hooks.example.com/x"));
        assert_eq!(params.timeout, Duration::from_secs(10));
        assert_eq!(params.user_agent, "Agent/2");
    }
}
