//! Record store configuration from TOML (`[record_store]` section)

use serde::{Deserialize, Serialize};

/// Largest page the record store is asked for
pub const MAX_RECORD_LIMIT: u32 = 100;

/// Raw record store configuration from TOML
///
/// ```toml
/// [record_store]
/// endpoint = "https://records.example.com/api/v2/tables/clients/records"
/// token = "..."
/// name_field = "Client Name"
/// status_field = "Status"
/// status_value = "Active"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecordStoreConfig {
    /// Records endpoint URL
    pub endpoint: Option<String>,
    /// Value of the `xc-token` header
    pub token: Option<String>,
    /// Column holding the client display name
    pub name_field: String,
    /// Column filtered on
    pub status_field: String,
    /// Required value of `status_field`
    pub status_value: String,
    /// Page size (1..=100)
    pub limit: u32,
}

impl Default for FileRecordStoreConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            name_field: "Client Name".to_string(),
            status_field: "Status".to_string(),
            status_value: "Active".to_string(),
            limit: MAX_RECORD_LIMIT,
        }
    }
}

impl FileRecordStoreConfig {
    /// Page size clamped to what the store accepts
    pub fn effective_limit(&self) -> u32 {
        self.limit.clamp(1, MAX_RECORD_LIMIT)
    }
}
