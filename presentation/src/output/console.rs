//! Console output formatter for submission results and the form

use crate::form::field::FormField;
use colored::Colorize;
use content_request_domain::{
    BatchReport, ClientDirectory, FormFields, SessionContext, SubmissionResult, SubmissionStatus,
    ValidationIssue,
};
use serde_json::json;

/// Formats form state and submission outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The one-line status message for a submission outcome
    pub fn result_message(result: &SubmissionResult) -> String {
        match &result.status {
            SubmissionStatus::Success { .. } => "✅ Content request sent successfully!".to_string(),
            SubmissionStatus::HttpError { code } => {
                format!("❌ Request failed with status code: {}", code)
            }
            SubmissionStatus::Timeout => {
                "⏱️ Request timed out. The webhook might be slow to respond.".to_string()
            }
            SubmissionStatus::ConnectionError => {
                "🔌 Connection error. Please check your internet connection.".to_string()
            }
            SubmissionStatus::OtherError { message } => format!("🚫 Request error: {}", message),
        }
    }

    /// Format a submission outcome with latency and response body
    pub fn format_result(result: &SubmissionResult) -> String {
        let message = Self::result_message(result);
        let mut output = if result.is_success() {
            format!("{}\n", message.green().bold())
        } else {
            format!("{}\n", message.red().bold())
        };

        if let Some(latency) = result.latency_ms {
            output.push_str(&format!("{} {}ms\n", "Response time:".dimmed(), latency));
        }

        if let Some(body) = &result.response {
            output.push_str(&format!("{}\n", "Response:".cyan().bold()));
            output.push_str(&Self::indent(&body.render(), "  "));
            output.push('\n');
        }

        output
    }

    /// One "❌ {issue}" line per violated constraint
    pub fn format_issues(issues: &[ValidationIssue]) -> String {
        issues
            .iter()
            .map(|issue| format!("{}\n", format!("❌ {}", issue).red()))
            .collect()
    }

    /// Format as JSON
    pub fn format_result_json(result: &SubmissionResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_issues_json(issues: &[ValidationIssue]) -> String {
        let fields: Vec<&str> = issues.iter().map(ValidationIssue::field).collect();
        let value = json!({ "status": "invalid", "issues": issues, "fields": fields });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// The fields the current variant shows, with their values
    pub fn format_fields(fields: &FormFields, session: &SessionContext) -> String {
        let variant = session.variant();
        let mut output = Self::section_header(&format!("Content request ({} form)", variant));

        for field in FormField::for_variant(variant) {
            let value = field.value(fields);
            let shown = if value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                value
            };
            output.push_str(&format!(
                "  {:<20} {:<9} {}\n",
                field.label().bold(),
                format!("[{}]", field.key()).dimmed(),
                shown
            ));
        }

        if variant.tracks_login() {
            output.push_str(&format!(
                "\n  {} {}\n",
                "Submitting as:".dimmed(),
                session.login()
            ));
        }

        output
    }

    /// Numbered client list for the session's directory
    pub fn format_directory(session: &SessionContext) -> String {
        let mut output = Self::section_header("Clients");

        if let ClientDirectory::Remote(cache) = session.directory() {
            if !cache.is_loaded() {
                output.push_str(&format!("  {}\n", "Not loaded yet (/reload)".dimmed()));
                return output;
            }
            if let Some(reason) = cache.get().and_then(|fetch| fetch.error()) {
                output.push_str(&format!(
                    "  {} {}\n",
                    "Could not load clients:".red(),
                    reason
                ));
            }
        }

        let names = session.client_names();
        if names.is_empty() {
            if session.accepts_free_text() {
                output.push_str(&format!(
                    "  {}\n",
                    "No directory; type any client name".dimmed()
                ));
            } else {
                output.push_str(&format!("  {}\n", "(no clients)".dimmed()));
            }
            return output;
        }

        for (i, name) in names.iter().enumerate() {
            output.push_str(&format!("  {:>3}. {}\n", i + 1, name));
        }
        output
    }

    pub fn format_directory_json(session: &SessionContext) -> String {
        let value = match session.directory() {
            ClientDirectory::Remote(cache) => json!({
                "source": "remote",
                "clients": cache.entries(),
                "error": cache.get().and_then(|fetch| fetch.error()),
            }),
            ClientDirectory::Static(directory) => json!({
                "source": "static",
                "clients": directory.names(),
                "protected": directory.protected(),
            }),
            ClientDirectory::FreeText => json!({ "source": "free_text", "clients": [] }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Summary of a bulk add or import
    pub fn format_batch(report: &BatchReport) -> String {
        let mut output = format!(
            "{} Added {} client(s)",
            "✓".green(),
            report.added.len()
        );
        if !report.skipped.is_empty() {
            output.push_str(&format!(
                ", skipped {} duplicate(s): {}",
                report.skipped.len(),
                report.skipped.join(", ")
            ));
        }
        if !report.invalid.is_empty() {
            output.push_str(&format!(
                ", ignored {} invalid entr{}: {}",
                report.invalid.len(),
                if report.invalid.len() == 1 { "y" } else { "ies" },
                report.invalid.join(", ")
            ));
        }
        output
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_request_domain::{
        DirectoryFetch, FormVariant, RemoteDirectoryCache, StaticClientDirectory,
    };
    use std::time::Duration;

    #[test]
    fn test_result_messages() {
        let ok = SubmissionResult::from_response(202, "", Duration::from_millis(5));
        assert_eq!(
            ConsoleFormatter::result_message(&ok),
            "✅ Content request sent successfully!"
        );

        let not_found = SubmissionResult::from_response(404, "nope", Duration::from_millis(5));
        assert_eq!(
            ConsoleFormatter::result_message(&not_found),
            "❌ Request failed with status code: 404"
        );

        let timeout = SubmissionResult::from_failure(SubmissionStatus::Timeout);
        assert_eq!(
            ConsoleFormatter::result_message(&timeout),
            "⏱️ Request timed out. The webhook might be slow to respond."
        );

        let refused = SubmissionResult::from_failure(SubmissionStatus::ConnectionError);
        assert_eq!(
            ConsoleFormatter::result_message(&refused),
            "🔌 Connection error. Please check your internet connection."
        );

        let other = SubmissionResult::from_failure(SubmissionStatus::OtherError {
            message: "builder error".to_string(),
        });
        assert_eq!(
            ConsoleFormatter::result_message(&other),
            "🚫 Request error: builder error"
        );
    }

    #[test]
    fn test_format_result_includes_body_and_latency() {
        let result =
            SubmissionResult::from_response(200, r#"{"id":7}"#, Duration::from_millis(42));
        let output = ConsoleFormatter::format_result(&result);
        assert!(output.contains("Content request sent successfully!"));
        assert!(output.contains("42ms"));
        assert!(output.contains("\"id\": 7"));
    }

    #[test]
    fn test_format_issues_one_line_each() {
        let output = ConsoleFormatter::format_issues(&[
            ValidationIssue::MissingTopicTitle,
            ValidationIssue::InvalidEmail,
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("❌ Topic/Title is required"));
        assert!(lines[1].contains("❌ Please enter a valid email address"));
    }

    #[test]
    fn test_issues_json() {
        let output = ConsoleFormatter::format_issues_json(&[ValidationIssue::MissingClientName]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "invalid");
        assert_eq!(value["issues"][0], "Client Name is required");
        assert_eq!(value["fields"][0], "client_name");
    }

    #[test]
    fn test_directory_lists_static_clients() {
        let seed = StaticClientDirectory::new(vec!["koala".to_string(), "Acme".to_string()]);
        let session = SessionContext::for_variant(FormVariant::Static, "guest", seed);
        let output = ConsoleFormatter::format_directory(&session);
        assert!(output.contains("1. koala"));
        assert!(output.contains("2. Acme"));
    }

    #[test]
    fn test_directory_shows_remote_failure() {
        let mut cache = RemoteDirectoryCache::new();
        cache.store(DirectoryFetch::Failed("Record store returned status 401".to_string()));
        let session =
            SessionContext::new(FormVariant::Remote, "guest", ClientDirectory::Remote(cache));

        let output = ConsoleFormatter::format_directory(&session);
        assert!(output.contains("Record store returned status 401"));
        assert!(output.contains("type any client name"));

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_directory_json(&session)).unwrap();
        assert_eq!(json["source"], "remote");
        assert_eq!(json["error"], "Record store returned status 401");
    }

    #[test]
    fn test_fields_hide_other_variant_inputs() {
        let session = SessionContext::for_variant(
            FormVariant::Generic,
            "octocat",
            StaticClientDirectory::default(),
        );
        let output = ConsoleFormatter::format_fields(&FormFields::default(), &session);
        assert!(output.contains("Webhook URL"));
        assert!(output.contains("Target Audience"));
        assert!(!output.contains("Email Address"));
        assert!(output.contains("octocat"));
    }

    #[test]
    fn test_batch_summary() {
        let report = BatchReport {
            added: vec!["x".to_string(), "y".to_string()],
            skipped: vec!["x".to_string()],
            invalid: Vec::new(),
        };
        let output = ConsoleFormatter::format_batch(&report);
        assert!(output.contains('✓'));
        assert!(output.contains("Added 2 client(s)"));
        assert!(output.contains("skipped 1 duplicate(s): x"));
        assert!(!output.contains("invalid"));
    }

    #[test]
    fn test_batch_summary_separates_invalid_entries() {
        let report = BatchReport {
            added: vec!["a".to_string()],
            skipped: Vec::new(),
            invalid: vec!["1".to_string(), "null".to_string()],
        };
        let output = ConsoleFormatter::format_batch(&report);
        assert!(output.contains("ignored 2 invalid entries: 1, null"));
        assert!(!output.contains("duplicate"));
    }
}
