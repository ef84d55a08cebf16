//! Client directory entry

use serde::Serialize;
use serde_json::{Map, Value};

/// A selectable client (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientEntry {
    /// Display name, used as `client_name` when selected
    pub name: String,
    /// Extra attributes reported by the external source
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl ClientEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
