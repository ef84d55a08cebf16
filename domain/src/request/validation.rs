//! Request validation.
//!
//! Checks run in a fixed order and every failing check is reported, so the
//! user sees all problems with one submit:
//!
//! 1. topic title present
//! 2. primary keyword present
//! 3. webhook URL present (variants where it is a form field)
//! 4. client name present
//! 5. word count within range and on the step grid
//! 6. email present, then email shaped like `local@domain.tld`
//!    (variants that collect email)
//!
//! "Present" means non-empty; whitespace is not trimmed.
//!
//! # Examples
//!
//! ```
//! use content_request_domain::request::validation::is_valid_email;
//!
//! assert!(is_valid_email("a@b.c"));
//! assert!(!is_valid_email("a@b"));
//! ```

use super::entities::{FormFields, MAX_WORD_COUNT, MIN_WORD_COUNT, WORD_COUNT_STEP};
use crate::form::variant::FormVariant;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Deliberately loose: anchored at the start only, so trailing text after a
/// matching prefix is accepted.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern compiles"));

/// A single unmet form constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingTopicTitle,
    MissingPrimaryKeyword,
    MissingWebhookUrl,
    MissingClientName,
    WordCountOutOfRange(u32),
    MissingEmail,
    InvalidEmail,
}

impl ValidationIssue {
    /// Form field the issue belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationIssue::MissingTopicTitle => "topic_title",
            ValidationIssue::MissingPrimaryKeyword => "primary_keyword",
            ValidationIssue::MissingWebhookUrl => "webhook_url",
            ValidationIssue::MissingClientName => "client_name",
            ValidationIssue::WordCountOutOfRange(_) => "target_word_count",
            ValidationIssue::MissingEmail | ValidationIssue::InvalidEmail => "email",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingTopicTitle => write!(f, "Topic/Title is required"),
            ValidationIssue::MissingPrimaryKeyword => write!(f, "Primary Keyword is required"),
            ValidationIssue::MissingWebhookUrl => write!(f, "Webhook URL is required"),
            ValidationIssue::MissingClientName => write!(f, "Client Name is required"),
            ValidationIssue::WordCountOutOfRange(_) => write!(
                f,
                "Target Word Count must be between {} and {} in steps of {}",
                MIN_WORD_COUNT, MAX_WORD_COUNT, WORD_COUNT_STEP
            ),
            ValidationIssue::MissingEmail => write!(f, "Email address is required"),
            ValidationIssue::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Check an email address against the permissive `[^@]+@[^@]+\.[^@]+` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether `count` is an accepted target word count
pub fn is_valid_word_count(count: u32) -> bool {
    (MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count)
        && (count - MIN_WORD_COUNT) % WORD_COUNT_STEP == 0
}

/// Validate the current form fields for a variant.
///
/// Pure function of its inputs. An empty result means the fields can be
/// submitted.
pub fn validate(fields: &FormFields, variant: FormVariant) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if fields.topic_title.is_empty() {
        issues.push(ValidationIssue::MissingTopicTitle);
    }
    if fields.primary_keyword.is_empty() {
        issues.push(ValidationIssue::MissingPrimaryKeyword);
    }
    if variant.collects_webhook_url() && fields.webhook_url.is_empty() {
        issues.push(ValidationIssue::MissingWebhookUrl);
    }
    if fields.client_name.is_empty() {
        issues.push(ValidationIssue::MissingClientName);
    }
    if !is_valid_word_count(fields.target_word_count) {
        issues.push(ValidationIssue::WordCountOutOfRange(
            fields.target_word_count,
        ));
    }
    if variant.collects_email() {
        if fields.email.is_empty() {
            issues.push(ValidationIssue::MissingEmail);
        } else if !is_valid_email(&fields.email) {
            issues.push(ValidationIssue::InvalidEmail);
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormFields {
        FormFields {
            topic_title: "Topic".to_string(),
            primary_keyword: "keyword".to_string(),
            email: "a@b.c".to_string(),
            client_name: "koala".to_string(),
            webhook_url: "https://hooks.example.com/x".to_string(),
            ..FormFields::default()
        }
    }

    // ==================== Email pattern ====================

    #[test]
    fn test_email_pattern_accepts_minimal_address() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.co.uk"));
    }

    #[test]
    fn test_email_pattern_rejects_missing_parts() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_pattern_is_prefix_match() {
        // Only the start is anchored; anything after a matching prefix passes.
        assert!(is_valid_email("a@b.c@d"));
        assert!(is_valid_email("a@b.c d"));
    }

    // ==================== Word count ====================

    #[test]
    fn test_word_count_bounds_and_step() {
        assert!(is_valid_word_count(100));
        assert!(is_valid_word_count(1000));
        assert!(is_valid_word_count(10_000));
        assert!(!is_valid_word_count(50));
        assert!(!is_valid_word_count(10_050));
        assert!(!is_valid_word_count(1010));
    }

    // ==================== validate ====================

    #[test]
    fn test_complete_fields_pass_for_every_variant() {
        for variant in [FormVariant::Generic, FormVariant::Static, FormVariant::Remote] {
            assert!(validate(&complete(), variant).is_empty(), "{variant}");
        }
    }

    #[test]
    fn test_empty_form_reports_all_in_order_static() {
        let issues = validate(&FormFields::default(), FormVariant::Static);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingTopicTitle,
                ValidationIssue::MissingPrimaryKeyword,
                ValidationIssue::MissingClientName,
                ValidationIssue::MissingEmail,
            ]
        );
    }

    #[test]
    fn test_empty_form_reports_all_in_order_generic() {
        let issues = validate(&FormFields::default(), FormVariant::Generic);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingTopicTitle,
                ValidationIssue::MissingPrimaryKeyword,
                ValidationIssue::MissingWebhookUrl,
                ValidationIssue::MissingClientName,
            ]
        );
    }

    #[test]
    fn test_generic_ignores_email() {
        let fields = FormFields {
            email: "not-an-email".to_string(),
            ..complete()
        };
        assert!(validate(&fields, FormVariant::Generic).is_empty());
    }

    #[test]
    fn test_bad_email_only_reports_format() {
        let fields = FormFields {
            email: "a@b".to_string(),
            ..complete()
        };
        assert_eq!(
            validate(&fields, FormVariant::Remote),
            vec![ValidationIssue::InvalidEmail]
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let fields = FormFields {
            topic_title: "  ".to_string(),
            ..complete()
        };
        assert!(validate(&fields, FormVariant::Static).is_empty());
    }

    #[test]
    fn test_word_count_reported_before_email() {
        let fields = FormFields {
            target_word_count: 99,
            email: String::new(),
            ..complete()
        };
        assert_eq!(
            validate(&fields, FormVariant::Static),
            vec![
                ValidationIssue::WordCountOutOfRange(99),
                ValidationIssue::MissingEmail,
            ]
        );
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            ValidationIssue::MissingTopicTitle.to_string(),
            "Topic/Title is required"
        );
        assert_eq!(
            ValidationIssue::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(ValidationIssue::InvalidEmail.field(), "email");
    }

    #[test]
    fn test_issue_serializes_as_message() {
        let json = serde_json::to_string(&ValidationIssue::MissingClientName).unwrap();
        assert_eq!(json, "\"Client Name is required\"");
    }
}
