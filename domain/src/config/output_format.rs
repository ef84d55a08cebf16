//! Output format value object

use serde::{Deserialize, Serialize};

/// How submission results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable status lines (default)
    Text,
    /// One JSON document per result
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}
