//! Presentation-level configuration
//!
//! Resolved settings for output formatting and REPL behavior. The binary
//! fills these from the config file and command-line flags.

use content_request_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show the spinner while a request is in flight
    pub show_progress: bool,
    /// Path to history file; `None` uses the data directory default
    pub history_file: Option<PathBuf>,
    /// Default target of `/export`
    pub export_path: PathBuf,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            export_path: PathBuf::from("client_list.json"),
        }
    }
}

impl ReplConfig {
    /// History location: the configured file, else
    /// `<data dir>/content-request/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("content-request").join("history.txt"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_history_file_wins() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/form-history")),
            ..ReplConfig::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/form-history")));
    }

    #[test]
    fn test_defaults() {
        let config = ReplConfig::default();
        assert!(config.show_progress);
        assert_eq!(config.export_path, PathBuf::from("client_list.json"));
        assert_eq!(OutputConfig::default().format, OutputFormat::Text);
    }
}
