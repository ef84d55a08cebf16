//! reqwest-backed [`WebhookGateway`]

use async_trait::async_trait;
use content_request_application::ports::webhook_gateway::{
    TransportError, WebhookGateway, WebhookResponse,
};
use content_request_domain::WebhookSubmission;
use std::error::Error as _;
use std::time::Duration;
use tracing::debug;

/// Posts submissions with a shared `reqwest::Client`.
///
/// The timeout is applied per request, so one client serves any configured
/// timeout.
pub struct HttpWebhookGateway {
    client: reqwest::Client,
}

impl HttpWebhookGateway {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
        })
    }

    /// Use a preconfigured client (proxy, TLS settings, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookGateway for HttpWebhookGateway {
    async fn post(
        &self,
        submission: &WebhookSubmission,
        timeout: Duration,
    ) -> Result<WebhookResponse, TransportError> {
        // Serialized by hand so Content-Type comes only from the header list
        let body = serde_json::to_vec(&submission.payload)
            .map_err(|e| TransportError::Other(format!("Failed to encode payload: {}", e)))?;

        let mut request = self
            .client
            .post(&submission.url)
            .timeout(timeout)
            .body(body);
        for (name, value) in submission.headers.iter() {
            request = request.header(name, value);
        }

        debug!("POST {} (timeout {:?})", submission.url, timeout);
        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        debug!("Webhook answered {} ({} bytes)", status, body.len());

        Ok(WebhookResponse { status, body })
    }
}

/// Map a reqwest failure onto the transport taxonomy
pub(crate) fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connection(describe(&error))
    } else {
        TransportError::Other(describe(&error))
    }
}

/// Error message including its source chain
pub(crate) fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
