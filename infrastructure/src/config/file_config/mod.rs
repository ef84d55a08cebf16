//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod directory;
mod form;
mod logging;
mod output;
mod record_store;
mod repl;
mod webhook;

pub use directory::FileDirectoryConfig;
pub use form::FileFormConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use record_store::{FileRecordStoreConfig, MAX_RECORD_LIMIT};
pub use repl::FileReplConfig;
pub use webhook::FileWebhookConfig;

use content_request_domain::{ConfigIssue, ConfigIssueCode, FormVariant};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Variant and session defaults
    pub form: FileFormConfig,
    /// Webhook target and transport settings
    pub webhook: FileWebhookConfig,
    /// Static client list seed
    pub directory: FileDirectoryConfig,
    /// Remote client directory source
    pub record_store: FileRecordStoreConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Fixed-URL variants have a webhook URL
    /// 2. The remote variant has a record store endpoint and token
    /// 3. Numeric settings are in range (warnings; values fall back or clamp)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let variant = self.form.variant;

        // 1. Webhook URL
        if !variant.collects_webhook_url() && is_blank(&self.webhook.url) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingWebhookUrl,
                format!("webhook.url is required for the '{}' form", variant),
            ));
        }

        // 2. Record store
        if variant == FormVariant::Remote {
            for (field, value) in [
                ("record_store.endpoint", &self.record_store.endpoint),
                ("record_store.token", &self.record_store.token),
            ] {
                if is_blank(value) {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::MissingRecordStore {
                            field: field.to_string(),
                        },
                        format!("{} is required for the 'remote' form", field),
                    ));
                }
            }
        }

        // 3. Ranges
        if self.webhook.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "webhook.timeout_secs".to_string(),
                },
                "webhook.timeout_secs: 0 is not allowed, using 30",
            ));
        }
        if self.record_store.limit == 0 || self.record_store.limit > MAX_RECORD_LIMIT {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "record_store.limit".to_string(),
                },
                format!(
                    "record_store.limit: {} is outside 1..={}, using {}",
                    self.record_store.limit,
                    MAX_RECORD_LIMIT,
                    self.record_store.effective_limit()
                ),
            ));
        }

        issues
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
