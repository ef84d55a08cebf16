//! Submit request use case
//!
//! Handles one [`SubmitAction`]:
//!
//! 1. **Validate** the field snapshot (all issues collected; nothing is sent
//!    while any remain)
//! 2. **Build** the payload and headers, stamped with the current UTC time
//! 3. **Send** exactly one POST with the configured timeout
//! 4. **Map** the outcome to a [`SubmissionResult`]
//!
//! Transport and HTTP failures are results, not errors: the caller renders
//! them and the form stays usable.

use crate::config::SubmissionParams;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::progress::{NoProgress, SubmissionProgress};
use crate::ports::submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger};
use crate::ports::webhook_gateway::{TransportError, WebhookGateway};
use content_request_domain::{
    ContentRequest, PayloadBuilder, SessionContext, SubmissionResult, SubmissionStatus,
    SubmissionTimestamp, SubmitAction, ValidationIssue,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that stop a submission before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// One or more form constraints are unmet.
    #[error("{} validation issue(s)", .0.len())]
    Invalid(Vec<ValidationIssue>),
}

impl SubmitError {
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            SubmitError::Invalid(issues) => issues,
        }
    }
}

/// Use case for submitting a content request to the webhook.
pub struct SubmitRequestUseCase {
    gateway: Arc<dyn WebhookGateway>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn SubmissionLogger>,
    params: SubmissionParams,
    builder: PayloadBuilder,
}

impl SubmitRequestUseCase {
    pub fn new(gateway: Arc<dyn WebhookGateway>, params: SubmissionParams) -> Self {
        let builder = PayloadBuilder::new().with_user_agent(params.user_agent.clone());
        Self {
            gateway,
            clock: Arc::new(SystemClock),
            logger: Arc::new(NoSubmissionLogger),
            params,
            builder,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn params(&self) -> &SubmissionParams {
        &self.params
    }

    /// Execute without progress reporting
    pub async fn execute(
        &self,
        session: &mut SessionContext,
        action: SubmitAction,
    ) -> Result<SubmissionResult, SubmitError> {
        self.execute_with_progress(session, action, &NoProgress).await
    }

    /// Execute, reporting start and completion of the network call.
    ///
    /// The session is borrowed mutably for the whole call so a second
    /// submission cannot start for it until this one resolves.
    pub async fn execute_with_progress(
        &self,
        session: &mut SessionContext,
        action: SubmitAction,
        progress: &dyn SubmissionProgress,
    ) -> Result<SubmissionResult, SubmitError> {
        let variant = session.variant();
        let request = ContentRequest::from_fields(
            action.into_fields(),
            variant,
            self.params.webhook_url.as_deref(),
        )
        .map_err(|issues| {
            debug!("Submission rejected with {} issue(s)", issues.len());
            SubmitError::Invalid(issues)
        })?;

        let timestamp = SubmissionTimestamp::new(self.clock.now());
        let submission = self.builder.build(&request, timestamp, session.login());

        info!(
            "Submitting content request for client '{}' ({} variant)",
            request.client_name(),
            variant
        );
        self.logger.log(SubmissionEvent::new(
            "submission_started",
            json!({
                "variant": variant.as_str(),
                "client_name": request.client_name(),
                "submitted_at": timestamp.formatted(),
            }),
        ));

        progress.on_submit_start(request.client_name());
        let started = Instant::now();
        let result = match self.gateway.post(&submission, self.params.timeout).await {
            Ok(response) => {
                SubmissionResult::from_response(response.status, &response.body, started.elapsed())
            }
            Err(error) => SubmissionResult::from_failure(Self::failure_status(error)),
        };
        progress.on_submit_complete(&result);

        match &result.status {
            SubmissionStatus::Success { code } => {
                info!(
                    "Webhook accepted request (status {}, {}ms)",
                    code,
                    result.latency_ms.unwrap_or_default()
                )
            }
            other => warn!("Webhook submission failed: {}", other.as_str()),
        }
        self.logger.log(SubmissionEvent::new(
            "submission_finished",
            json!({
                "client_name": request.client_name(),
                "status": result.status.as_str(),
                "http_code": result.status.http_code(),
                "latency_ms": result.latency_ms,
            }),
        ));

        Ok(result)
    }

    fn failure_status(error: TransportError) -> SubmissionStatus {
        match error {
            TransportError::Timeout => SubmissionStatus::Timeout,
            TransportError::Connection(reason) => {
                debug!("Connection failure: {}", reason);
                SubmissionStatus::ConnectionError
            }
            TransportError::Other(message) => SubmissionStatus::OtherError { message },
        }
    }
}
