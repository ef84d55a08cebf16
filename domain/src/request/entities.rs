//! Content request entities

use super::validation::{ValidationIssue, validate};
use crate::form::variant::FormVariant;
use serde::{Deserialize, Serialize};

/// Smallest accepted target word count
pub const MIN_WORD_COUNT: u32 = 100;
/// Largest accepted target word count
pub const MAX_WORD_COUNT: u32 = 10_000;
/// Word count pre-filled in a fresh form
pub const DEFAULT_WORD_COUNT: u32 = 1_000;
/// Increment used by the word count input
pub const WORD_COUNT_STEP: u32 = 50;

/// Raw values currently typed into the form.
///
/// Nothing here is validated; fields a variant does not collect are simply
/// left empty and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub topic_title: String,
    pub primary_keyword: String,
    pub email: String,
    pub target_word_count: u32,
    pub target_audience: String,
    pub client_name: String,
    pub additional_details: String,
    pub webhook_url: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            topic_title: String::new(),
            primary_keyword: String::new(),
            email: String::new(),
            target_word_count: DEFAULT_WORD_COUNT,
            target_audience: String::new(),
            client_name: String::new(),
            additional_details: String::new(),
            webhook_url: String::new(),
        }
    }
}

/// A validated, immutable content request (Entity)
///
/// Only obtainable through [`ContentRequest::from_fields`], which refuses to
/// build while any validation issue remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    variant: FormVariant,
    topic_title: String,
    primary_keyword: String,
    email: Option<String>,
    target_word_count: u32,
    target_audience: Option<String>,
    client_name: String,
    additional_details: String,
    webhook_url: String,
}

impl ContentRequest {
    /// Validate `fields` for `variant` and build the request.
    ///
    /// `configured_webhook_url` is used for variants whose URL is not a form
    /// field. Returns every violated constraint on failure.
    pub fn from_fields(
        fields: FormFields,
        variant: FormVariant,
        configured_webhook_url: Option<&str>,
    ) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = validate(&fields, variant);

        let webhook_url = if variant.collects_webhook_url() {
            fields.webhook_url
        } else {
            match configured_webhook_url {
                Some(url) if !url.is_empty() => url.to_string(),
                _ => {
                    issues.push(ValidationIssue::MissingWebhookUrl);
                    String::new()
                }
            }
        };

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Self {
            variant,
            topic_title: fields.topic_title,
            primary_keyword: fields.primary_keyword,
            email: variant.collects_email().then_some(fields.email),
            target_word_count: fields.target_word_count,
            target_audience: variant
                .collects_target_audience()
                .then_some(fields.target_audience),
            client_name: fields.client_name,
            additional_details: fields.additional_details,
            webhook_url,
        })
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn topic_title(&self) -> &str {
        &self.topic_title
    }

    pub fn primary_keyword(&self) -> &str {
        &self.primary_keyword
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn target_word_count(&self) -> u32 {
        self.target_word_count
    }

    pub fn target_audience(&self) -> Option<&str> {
        self.target_audience.as_deref()
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn additional_details(&self) -> &str {
        &self.additional_details
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            topic_title: "Rust for web services".to_string(),
            primary_keyword: "rust web".to_string(),
            email: "writer@example.com".to_string(),
            client_name: "koala".to_string(),
            additional_details: "Friendly tone".to_string(),
            ..FormFields::default()
        }
    }

    #[test]
    fn test_default_word_count() {
        assert_eq!(FormFields::default().target_word_count, 1000);
    }

    #[test]
    fn test_static_request_uses_configured_url() {
        let request = ContentRequest::from_fields(
            filled(),
            FormVariant::Static,
            Some("https://hooks.example.com/abc"),
        )
        .unwrap();
        assert_eq!(request.webhook_url(), "https://hooks.example.com/abc");
        assert_eq!(request.email(), Some("writer@example.com"));
        assert_eq!(request.target_audience(), None);
    }

    #[test]
    fn test_generic_request_uses_field_url_and_drops_email() {
        let mut fields = filled();
        fields.webhook_url = "https://hooks.example.com/generic".to_string();
        fields.target_audience = "CTOs".to_string();

        let request =
            ContentRequest::from_fields(fields, FormVariant::Generic, Some("ignored")).unwrap();
        assert_eq!(request.webhook_url(), "https://hooks.example.com/generic");
        assert_eq!(request.email(), None);
        assert_eq!(request.target_audience(), Some("CTOs"));
    }

    #[test]
    fn test_missing_configured_url_is_reported() {
        let issues = ContentRequest::from_fields(filled(), FormVariant::Remote, None).unwrap_err();
        assert_eq!(issues, vec![ValidationIssue::MissingWebhookUrl]);
    }

    #[test]
    fn test_invalid_fields_are_all_reported() {
        let fields = FormFields {
            email: "abc".to_string(),
            ..FormFields::default()
        };
        let issues =
            ContentRequest::from_fields(fields, FormVariant::Static, Some("https://x.y")).unwrap_err();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingTopicTitle,
                ValidationIssue::MissingPrimaryKeyword,
                ValidationIssue::MissingClientName,
                ValidationIssue::InvalidEmail,
            ]
        );
    }
}
