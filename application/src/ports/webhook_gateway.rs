//! Webhook gateway port
//!
//! Defines the interface for delivering a built submission over HTTP.

use async_trait::async_trait;
use content_request_domain::WebhookSubmission;
use std::time::Duration;
use thiserror::Error;

/// Transport-level failures (no HTTP response was received)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("{0}")]
    Other(String),
}

/// A received HTTP response, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

/// Gateway for webhook delivery
///
/// Implementations perform exactly one request per call: no retries, no
/// redirects-as-retries, no backoff.
#[async_trait]
pub trait WebhookGateway: Send + Sync {
    /// POST the submission's payload and headers to its URL
    async fn post(
        &self,
        submission: &WebhookSubmission,
        timeout: Duration,
    ) -> Result<WebhookResponse, TransportError>;
}
