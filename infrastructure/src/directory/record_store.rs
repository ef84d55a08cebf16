//! Record store client directory source.
//!
//! Queries a table-style REST records endpoint for active clients:
//!
//! ```text
//! GET <endpoint>?fields=<name>,<status>&where=(<status>,eq,<value>)&limit=100
//! xc-token: <token>
//! ```
//!
//! The answer is a JSON object whose `list` key holds the records.

use crate::config::FileRecordStoreConfig;
use crate::webhook::http_gateway::describe;
use async_trait::async_trait;
use content_request_application::ports::directory_source::{
    ClientDirectorySource, DirectoryError,
};
use content_request_domain::DirectoryFetch;
use std::time::Duration;
use tracing::debug;

/// Header carrying the API token
const TOKEN_HEADER: &str = "xc-token";

/// Connection settings for the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStoreSettings {
    pub endpoint: String,
    pub token: String,
    pub name_field: String,
    pub status_field: String,
    pub status_value: String,
    pub limit: u32,
    pub timeout: Duration,
}

impl RecordStoreSettings {
    /// Build from the `[record_store]` section.
    ///
    /// Returns `None` when the endpoint or token is missing, so callers can
    /// fall back to free-text client entry.
    pub fn from_config(config: &FileRecordStoreConfig, timeout: Duration) -> Option<Self> {
        let endpoint = config.endpoint.as_deref().filter(|v| !v.trim().is_empty())?;
        let token = config.token.as_deref().filter(|v| !v.trim().is_empty())?;
        Some(Self {
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            name_field: config.name_field.clone(),
            status_field: config.status_field.clone(),
            status_value: config.status_value.clone(),
            limit: config.effective_limit(),
            timeout,
        })
    }

    fn query(&self) -> [(&'static str, String); 3] {
        [
            ("fields", format!("{},{}", self.name_field, self.status_field)),
            (
                "where",
                format!("({},eq,{})", self.status_field, self.status_value),
            ),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Fetches active clients from the record store
pub struct RecordStoreDirectorySource {
    client: reqwest::Client,
    settings: RecordStoreSettings,
}

impl RecordStoreDirectorySource {
    pub fn new(settings: RecordStoreSettings) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(reqwest::Client::builder().build()?, settings))
    }

    pub fn with_client(client: reqwest::Client, settings: RecordStoreSettings) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl ClientDirectorySource for RecordStoreDirectorySource {
    async fn fetch(&self) -> Result<DirectoryFetch, DirectoryError> {
        debug!("Fetching client directory from {}", self.settings.endpoint);

        let response = self
            .client
            .get(&self.settings.endpoint)
            .header(TOKEN_HEADER, &self.settings.token)
            .query(&self.settings.query())
            .timeout(self.settings.timeout)
            .send()
            .await
            .map_err(|e| DirectoryError::Unreachable(describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DirectoryError::Malformed(describe(&e)))?;

        Ok(DirectoryFetch::from_records_response(
            &body,
            &self.settings.name_field,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, direct_client, serve_once};

    fn settings(endpoint: &str) -> RecordStoreSettings {
        RecordStoreSettings {
            endpoint: endpoint.to_string(),
            token: "tok-123".to_string(),
            name_field: "Name".to_string(),
            status_field: "Status".to_string(),
            status_value: "Active".to_string(),
            limit: 100,
            timeout: Duration::from_secs(5),
        }
    }

    fn source(endpoint: &str) -> RecordStoreDirectorySource {
        RecordStoreDirectorySource::with_client(direct_client(), settings(endpoint))
    }

    #[test]
    fn test_settings_require_endpoint_and_token() {
        let mut config = FileRecordStoreConfig::default();
        assert!(RecordStoreSettings::from_config(&config, Duration::from_secs(30)).is_none());

        config.endpoint = Some("https://records.example.com/t".to_string());
        config.token = Some("abc".to_string());
        config.limit = 400;
        let settings = RecordStoreSettings::from_config(&config, Duration::from_secs(30)).unwrap();
        assert_eq!(settings.limit, 100);
        assert_eq!(settings.name_field, "Client Name");
    }

    #[tokio::test]
    async fn test_fetch_sends_token_and_filter() {
        let body = r#"{"list":[{"Name":"Acme","Status":"Active"}],"pageInfo":{}}"#;
        let (url, server) = serve_once(200, body).await;

        let fetch = source(&format!("{}/records", url)).fetch().await.unwrap();
        let names: Vec<&str> = fetch.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Acme"]);

        let raw = server.await.unwrap();
        let request_line = raw.lines().next().unwrap();
        assert!(request_line.starts_with("GET /records?"));
        assert!(request_line.contains("fields=Name%2CStatus"));
        assert!(request_line.contains("where=%28Status%2Ceq%2CActive%29"));
        assert!(request_line.contains("limit=100"));
        assert!(raw.to_lowercase().contains("xc-token: tok-123"));
    }

    #[tokio::test]
    async fn test_fetch_without_list_is_empty() {
        let (url, _server) = serve_once(200, r#"{"rows":[]}"#).await;
        assert_eq!(source(&url).fetch().await.unwrap(), DirectoryFetch::Empty);
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let (url, _server) = serve_once(401, "unauthorized").await;
        assert_eq!(
            source(&url).fetch().await.unwrap_err(),
            DirectoryError::Status(401)
        );
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let (url, _server) = serve_once(200, "<html>").await;
        assert!(matches!(
            source(&url).fetch().await.unwrap_err(),
            DirectoryError::Malformed(_)
        ));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        let url = closed_port_url().await;
        assert!(matches!(
            source(&url).fetch().await.unwrap_err(),
            DirectoryError::Unreachable(_)
        ));
    }
}
