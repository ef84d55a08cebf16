//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write diagnostic (tracing) output to this file instead of stderr
    pub file: Option<String>,
    /// Append submission events as JSON lines to this file
    pub submission_log: Option<String>,
}
