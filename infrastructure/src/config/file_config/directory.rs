//! Static client list configuration from TOML (`[directory]` section)

use content_request_domain::{DEFAULT_CLIENT, StaticClientDirectory};
use serde::{Deserialize, Serialize};

/// Raw static directory configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDirectoryConfig {
    /// Seed list for each new session
    pub clients: Vec<String>,
    /// Entry that can never be removed
    pub protected: String,
    /// Default path for `/export`
    pub export_path: String,
}

impl Default for FileDirectoryConfig {
    fn default() -> Self {
        Self {
            clients: vec![DEFAULT_CLIENT.to_string()],
            protected: DEFAULT_CLIENT.to_string(),
            export_path: "client_list.json".to_string(),
        }
    }
}

impl FileDirectoryConfig {
    /// Fresh session directory built from the seed list
    pub fn to_static_directory(&self) -> StaticClientDirectory {
        StaticClientDirectory::new(self.clients.clone()).with_protected(self.protected.clone())
    }
}
