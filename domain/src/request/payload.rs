//! Webhook payload and header construction
//!
//! The JSON body and headers are consumed by a third party, so key names,
//! key order and the timestamp format are fixed.

use super::entities::ContentRequest;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Literal sent as `request_type` and `X-Request-Type`
pub const REQUEST_TYPE: &str = "content_creation";

/// Default `User-Agent` header value
pub const DEFAULT_USER_AGENT: &str = "Content-Request-Client";

/// `YYYY-MM-DD HH:MM:SS`, second precision, no offset suffix
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_USER_AGENT: &str = "User-Agent";
pub const HEADER_TIMESTAMP: &str = "X-Timestamp-UTC";
pub const HEADER_REQUEST_TYPE: &str = "X-Request-Type";
pub const HEADER_CLIENT_NAME: &str = "X-Client-Name";
pub const HEADER_SUBMITTED_BY: &str = "X-Submitted-By";

/// The UTC instant a submission was made (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTimestamp(DateTime<Utc>);

impl SubmissionTimestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Render in the wire format shared by the body and `X-Timestamp-UTC`
    pub fn formatted(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for SubmissionTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// JSON body posted to the webhook.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub topic_title: String,
    pub primary_keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub target_word_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    pub client_name: String,
    pub additional_details: String,
    pub current_datetime_utc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_login: Option<String>,
    pub request_type: String,
}

/// Ordered header list for the webhook call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookHeaders(Vec<(String, String)>);

impl WebhookHeaders {
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything needed to perform the webhook POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSubmission {
    pub url: String,
    pub payload: WebhookPayload,
    pub headers: WebhookHeaders,
    pub timestamp: SubmissionTimestamp,
}

/// Builds [`WebhookSubmission`]s from validated requests
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    user_agent: String,
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build body and headers.
    ///
    /// `login` is only used by variants that track a session login; it is
    /// sent as `current_user_login` and `X-Submitted-By`.
    pub fn build(
        &self,
        request: &ContentRequest,
        timestamp: SubmissionTimestamp,
        login: &str,
    ) -> WebhookSubmission {
        let stamp = timestamp.formatted();
        let tracks_login = request.variant().tracks_login();

        let payload = WebhookPayload {
            topic_title: request.topic_title().to_string(),
            primary_keyword: request.primary_keyword().to_string(),
            email: request.email().map(str::to_string),
            target_word_count: request.target_word_count(),
            target_audience: request.target_audience().map(str::to_string),
            client_name: request.client_name().to_string(),
            additional_details: request.additional_details().to_string(),
            current_datetime_utc: stamp.clone(),
            current_user_login: tracks_login.then(|| login.to_string()),
            request_type: REQUEST_TYPE.to_string(),
        };

        let mut headers = WebhookHeaders::default();
        headers.push(HEADER_CONTENT_TYPE, "application/json");
        headers.push(HEADER_USER_AGENT, self.user_agent.as_str());
        headers.push(HEADER_TIMESTAMP, stamp);
        headers.push(HEADER_REQUEST_TYPE, REQUEST_TYPE);
        headers.push(HEADER_CLIENT_NAME, request.client_name());
        if tracks_login {
            headers.push(HEADER_SUBMITTED_BY, login);
        }

        WebhookSubmission {
            url: request.webhook_url().to_string(),
            payload,
            headers,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::variant::FormVariant;
    use crate::request::entities::FormFields;
    use chrono::TimeZone;

    fn fixed_time() -> SubmissionTimestamp {
        SubmissionTimestamp::new(Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 3).unwrap())
    }

    fn fields() -> FormFields {
        FormFields {
            topic_title: "Async Rust".to_string(),
            primary_keyword: "tokio".to_string(),
            email: "me@example.com".to_string(),
            target_word_count: 1500,
            target_audience: "Backend engineers".to_string(),
            client_name: "koala".to_string(),
            additional_details: String::new(),
            webhook_url: "https://hooks.example.com/generic".to_string(),
        }
    }

    fn request(variant: FormVariant) -> ContentRequest {
        ContentRequest::from_fields(fields(), variant, Some("https://hooks.example.com/fixed"))
            .unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(fixed_time().formatted(), "2025-03-07 09:05:03");
        assert_eq!(fixed_time().to_string(), "2025-03-07 09:05:03");
    }

    #[test]
    fn test_static_payload_keys_in_order() {
        let submission = PayloadBuilder::new().build(&request(FormVariant::Static), fixed_time(), "");
        let json = serde_json::to_string(&submission.payload).unwrap();
        assert_eq!(
            json,
            r#"{"topic_title":"Async Rust","primary_keyword":"tokio","email":"me@example.com","target_word_count":1500,"client_name":"koala","additional_details":"","current_datetime_utc":"2025-03-07 09:05:03","request_type":"content_creation"}"#
        );
        assert_eq!(submission.url, "https://hooks.example.com/fixed");
    }

    #[test]
    fn test_generic_payload_has_login_and_audience() {
        let submission =
            PayloadBuilder::new().build(&request(FormVariant::Generic), fixed_time(), "octocat");
        let value = serde_json::to_value(&submission.payload).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "topic_title",
                "primary_keyword",
                "target_word_count",
                "target_audience",
                "client_name",
                "additional_details",
                "current_datetime_utc",
                "current_user_login",
                "request_type",
            ]
        );
        assert_eq!(value["current_user_login"], "octocat");
        assert_eq!(submission.url, "https://hooks.example.com/generic");
    }

    #[test]
    fn test_headers_static() {
        let submission = PayloadBuilder::new().build(&request(FormVariant::Static), fixed_time(), "");
        let names: Vec<&str> = submission.headers.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "Content-Type",
                "User-Agent",
                "X-Timestamp-UTC",
                "X-Request-Type",
                "X-Client-Name",
            ]
        );
        assert_eq!(submission.headers.get("x-timestamp-utc"), Some("2025-03-07 09:05:03"));
        assert_eq!(submission.headers.get("X-Client-Name"), Some("koala"));
        assert_eq!(submission.headers.get("X-Submitted-By"), None);
    }

    #[test]
    fn test_headers_generic_include_submitter() {
        let submission = PayloadBuilder::new()
            .with_user_agent("Custom-Agent/1.0")
            .build(&request(FormVariant::Generic), fixed_time(), "octocat");
        assert_eq!(submission.headers.get("X-Submitted-By"), Some("octocat"));
        assert_eq!(submission.headers.get("User-Agent"), Some("Custom-Agent/1.0"));
        assert_eq!(submission.headers.len(), 6);
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = PayloadBuilder::new();
        let a = builder.build(&request(FormVariant::Remote), fixed_time(), "");
        let b = builder.build(&request(FormVariant::Remote), fixed_time(), "");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(&a.payload).unwrap(),
            serde_json::to_vec(&b.payload).unwrap()
        );
    }
}
