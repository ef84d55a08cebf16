//! Form configuration from TOML (`[form]` section)

use content_request_domain::FormVariant;
use serde::{Deserialize, Serialize};

/// Raw form configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Deployed form variant: "generic", "static" or "remote"
    pub variant: FormVariant,
    /// Session login sent with generic-variant submissions
    pub login: String,
}

impl Default for FileFormConfig {
    fn default() -> Self {
        Self {
            variant: FormVariant::default(),
            login: "guest".to_string(),
        }
    }
}
