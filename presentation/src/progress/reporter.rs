//! Progress reporting while a network call is in flight

use colored::Colorize;
use content_request_application::ports::progress::{NoProgress, SubmissionProgress};
use content_request_domain::{DirectoryFetch, OutputFormat, SubmissionResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// How progress is shown around network calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// Animated spinner on the terminal
    Spinner,
    /// One line per step, for redirected stderr
    Plain,
    Silent,
}

impl ProgressMode {
    /// JSON output and disabled progress are silent; otherwise a spinner
    /// when `interactive`, plain lines when not.
    pub fn choose(show_progress: bool, format: OutputFormat, interactive: bool) -> Self {
        if !show_progress || format != OutputFormat::Text {
            ProgressMode::Silent
        } else if interactive {
            ProgressMode::Spinner
        } else {
            ProgressMode::Plain
        }
    }

    /// [`choose`](Self::choose) with interactivity taken from stderr
    pub fn detect(show_progress: bool, format: OutputFormat) -> Self {
        Self::choose(show_progress, format, std::io::stderr().is_terminal())
    }

    pub fn reporter(self) -> Box<dyn SubmissionProgress> {
        match self {
            ProgressMode::Spinner => Box::new(ProgressReporter::new()),
            ProgressMode::Plain => Box::new(SimpleProgress),
            ProgressMode::Silent => Box::new(NoProgress),
        }
    }
}

/// Spinner shown while the webhook or record store is being called
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: &'static str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    /// Remove the spinner; the caller prints the outcome itself
    fn finish(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for ProgressReporter {
    fn on_submit_start(&self, _client_name: &str) {
        self.start("Sending content request...");
    }

    fn on_submit_complete(&self, _result: &SubmissionResult) {
        self.finish();
    }

    fn on_directory_fetch_start(&self) {
        self.start("Loading clients...");
    }

    fn on_directory_fetch_complete(&self, _fetch: &DirectoryFetch) {
        self.finish();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SubmissionProgress for SimpleProgress {
    fn on_submit_start(&self, client_name: &str) {
        println!(
            "{} Sending content request for {}...",
            "->".cyan(),
            client_name.bold()
        );
    }

    fn on_submit_complete(&self, result: &SubmissionResult) {
        if result.is_success() {
            println!("  {} {}", "✓".green(), result.status.as_str());
        } else {
            println!("  {} {}", "✗".red(), result.status.as_str());
        }
    }

    fn on_directory_fetch_start(&self) {
        println!("{} Loading clients...", "->".cyan());
    }

    fn on_directory_fetch_complete(&self, fetch: &DirectoryFetch) {
        match fetch.error() {
            Some(reason) => println!("  {} {}", "✗".red(), reason),
            None => println!("  {} {} client(s)", "✓".green(), fetch.entries().len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_request_domain::SubmissionStatus;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_submit_start("koala");
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_submit_complete(&SubmissionResult::from_failure(SubmissionStatus::Timeout));
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_mode_follows_format_and_terminal() {
        assert_eq!(
            ProgressMode::choose(true, OutputFormat::Text, true),
            ProgressMode::Spinner
        );
        assert_eq!(
            ProgressMode::choose(true, OutputFormat::Text, false),
            ProgressMode::Plain
        );
        assert_eq!(
            ProgressMode::choose(true, OutputFormat::Json, true),
            ProgressMode::Silent
        );
        assert_eq!(
            ProgressMode::choose(false, OutputFormat::Text, true),
            ProgressMode::Silent
        );
    }

    #[test]
    fn test_plain_progress_handles_every_event() {
        let progress = ProgressMode::Plain.reporter();
        progress.on_submit_start("koala");
        progress.on_submit_complete(&SubmissionResult::from_failure(SubmissionStatus::Timeout));
        progress.on_directory_fetch_start();
        progress.on_directory_fetch_complete(&DirectoryFetch::Failed("offline".to_string()));
        progress.on_directory_fetch_complete(&DirectoryFetch::Empty);
    }

    #[test]
    fn test_finish_without_start_is_harmless() {
        let reporter = ProgressReporter::default();
        reporter.on_directory_fetch_complete(&DirectoryFetch::Empty);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
