//! Submission result value objects

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Status codes treated as a successful submission
pub const SUCCESS_STATUS_CODES: [u16; 3] = [200, 201, 202];

/// Response body, parsed as JSON when possible
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "lowercase")]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parse a raw body; `None` for an empty body
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Some(ResponseBody::Json(value)),
            Err(_) => Some(ResponseBody::Text(raw.to_string())),
        }
    }

    /// Human-readable rendering (pretty JSON or the raw text)
    pub fn render(&self) -> String {
        match self {
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ResponseBody::Text(text) => text.clone(),
        }
    }
}

/// Outcome kind of a single submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// 200, or 201/202 (accepted)
    Success { code: u16 },
    /// Any other HTTP status
    HttpError { code: u16 },
    /// The request did not finish within the timeout
    Timeout,
    /// The endpoint could not be reached
    ConnectionError,
    /// Any other transport failure
    OtherError { message: String },
}

impl SubmissionStatus {
    /// Classify an HTTP status code
    pub fn from_http_status(code: u16) -> Self {
        if SUCCESS_STATUS_CODES.contains(&code) {
            SubmissionStatus::Success { code }
        } else {
            SubmissionStatus::HttpError { code }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success { .. })
    }

    /// 201/202: the webhook accepted the request for later processing
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionStatus::Success { code } if *code != 200)
    }

    /// HTTP status code, when a response was received
    pub fn http_code(&self) -> Option<u16> {
        match self {
            SubmissionStatus::Success { code } | SubmissionStatus::HttpError { code } => {
                Some(*code)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Success { .. } => "success",
            SubmissionStatus::HttpError { .. } => "http_error",
            SubmissionStatus::Timeout => "timeout",
            SubmissionStatus::ConnectionError => "connection_error",
            SubmissionStatus::OtherError { .. } => "other_error",
        }
    }
}

/// Result of one submit action (Value Object)
///
/// Transient: rendered once and dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    #[serde(flatten)]
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl SubmissionResult {
    /// Build from a received HTTP response
    pub fn from_response(code: u16, raw_body: &str, latency: Duration) -> Self {
        let status = SubmissionStatus::from_http_status(code);
        let response = if status.is_success() {
            ResponseBody::parse(raw_body)
        } else if raw_body.is_empty() {
            None
        } else {
            // Failures surface the raw body untouched
            Some(ResponseBody::Text(raw_body.to_string()))
        };
        Self {
            status,
            response,
            latency_ms: Some(latency.as_millis() as u64),
        }
    }

    /// Build from a transport-level failure (no response received)
    pub fn from_failure(status: SubmissionStatus) -> Self {
        Self {
            status,
            response: None,
            latency_ms: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
