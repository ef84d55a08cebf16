//! Remote-fetched client directory
//!
//! The record store's response is matched into a [`DirectoryFetch`] once and
//! cached in the session by [`RemoteDirectoryCache`].

use super::entry::ClientEntry;
use serde_json::Value;

/// Outcome of querying the record store
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryFetch {
    /// At least one usable record
    Loaded(Vec<ClientEntry>),
    /// The store answered but produced no usable records
    Empty,
    /// The store was unreachable or answered with something unusable
    Failed(String),
}

impl DirectoryFetch {
    /// `Loaded` for a non-empty list, `Empty` otherwise
    pub fn from_entries(entries: Vec<ClientEntry>) -> Self {
        if entries.is_empty() {
            DirectoryFetch::Empty
        } else {
            DirectoryFetch::Loaded(entries)
        }
    }

    /// Interpret a record store response body.
    ///
    /// Records live under a `list` key. A missing key or a non-array value
    /// yields `Empty`. Each record's display name is the string under
    /// `name_field`; records without one are dropped and the remaining
    /// fields become metadata.
    pub fn from_records_response(body: &Value, name_field: &str) -> Self {
        let Some(Value::Array(records)) = body.get("list") else {
            return DirectoryFetch::Empty;
        };

        let entries = records
            .iter()
            .filter_map(|record| {
                let fields = record.as_object()?;
                let name = fields.get(name_field)?.as_str()?.trim();
                if name.is_empty() {
                    return None;
                }
                let entry = fields
                    .iter()
                    .filter(|(key, _)| key.as_str() != name_field)
                    .fold(ClientEntry::new(name), |entry, (key, value)| {
                        entry.with_metadata(key.clone(), value.clone())
                    });
                Some(entry)
            })
            .collect();

        Self::from_entries(entries)
    }

    /// Entries to offer; empty for `Empty` and `Failed`
    pub fn entries(&self) -> &[ClientEntry] {
        match self {
            DirectoryFetch::Loaded(entries) => entries,
            DirectoryFetch::Empty | DirectoryFetch::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DirectoryFetch::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Session-scoped cache of the remote directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteDirectoryCache {
    fetched: Option<DirectoryFetch>,
}

impl RemoteDirectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.fetched.is_some()
    }

    pub fn get(&self) -> Option<&DirectoryFetch> {
        self.fetched.as_ref()
    }

    pub fn store(&mut self, fetch: DirectoryFetch) {
        self.fetched = Some(fetch);
    }

    pub fn clear(&mut self) {
        self.fetched = None;
    }

    /// Cached entries; empty when not loaded or the fetch failed
    pub fn entries(&self) -> &[ClientEntry] {
        self.fetched.as_ref().map(DirectoryFetch::entries).unwrap_or(&[])
    }
}
