//! In-memory client list
//!
//! Duplicate rules differ per operation and are kept exactly:
//!
//! | Operation  | Duplicate check              |
//! |------------|------------------------------|
//! | `add`      | case-insensitive             |
//! | `bulk_add` | exact string match           |
//! | `import`   | exact string match           |

use crate::core::error::DomainError;
use serde::Serialize;
use serde_json::Value;

/// Entry present in a fresh session that can never be removed
pub const DEFAULT_CLIENT: &str = "koala";

/// Outcome of a batch operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub added: Vec<String>,
    /// Names already in the list
    pub skipped: Vec<String>,
    /// Imported elements that are not a non-empty string, as JSON text
    pub invalid: Vec<String>,
}

/// Session-scoped, editable list of client names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticClientDirectory {
    clients: Vec<String>,
    protected: String,
}

impl Default for StaticClientDirectory {
    fn default() -> Self {
        Self::new(vec![DEFAULT_CLIENT.to_string()])
    }
}

impl StaticClientDirectory {
    /// Create a directory from a seed list, protecting [`DEFAULT_CLIENT`]
    pub fn new(seed: Vec<String>) -> Self {
        Self {
            clients: seed,
            protected: DEFAULT_CLIENT.to_string(),
        }
    }

    /// A directory with no entries
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Override the protected entry (compared exactly on removal)
    pub fn with_protected(mut self, name: impl Into<String>) -> Self {
        self.protected = name.into();
        self
    }

    pub fn names(&self) -> &[String] {
        &self.clients
    }

    pub fn protected(&self) -> &str {
        &self.protected
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.clients.iter().any(|c| c == name)
    }

    /// Find an entry ignoring case
    pub fn find_ignore_case(&self, name: &str) -> Option<&str> {
        let needle = name.to_lowercase();
        self.clients
            .iter()
            .find(|c| c.to_lowercase() == needle)
            .map(String::as_str)
    }

    /// Add a single client.
    ///
    /// The name is trimmed; a name matching an existing entry ignoring case
    /// is rejected.
    pub fn add(&mut self, name: &str) -> Result<String, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyClientName);
        }
        if let Some(existing) = self.find_ignore_case(name) {
            return Err(DomainError::DuplicateClient(existing.to_string()));
        }
        self.clients.push(name.to_string());
        Ok(name.to_string())
    }

    /// Remove a client by exact name. The protected entry is refused.
    pub fn remove(&mut self, name: &str) -> Result<(), DomainError> {
        if name == self.protected {
            return Err(DomainError::ProtectedClient(self.protected.clone()));
        }
        match self.clients.iter().position(|c| c == name) {
            Some(index) => {
                self.clients.remove(index);
                Ok(())
            }
            None => Err(DomainError::ClientNotFound(name.to_string())),
        }
    }

    /// Add every non-blank line of `text`, skipping exact duplicates
    pub fn bulk_add(&mut self, text: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for line in text.lines() {
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            self.merge_one(name, &mut report);
        }
        report
    }

    /// Serialize the list as a pretty JSON array of strings
    pub fn export(&self) -> String {
        serde_json::to_string_pretty(&self.clients).unwrap_or_else(|_| "[]".to_string())
    }

    /// Merge a JSON array of names into the list.
    ///
    /// Anything other than a JSON array is rejected. Non-string and empty
    /// elements are reported as invalid.
    pub fn import(&mut self, json: &str) -> Result<BatchReport, DomainError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DomainError::ImportFormat(format!("not valid JSON: {}", e)))?;

        let Value::Array(items) = value else {
            return Err(DomainError::ImportFormat(
                "expected a JSON array of client names".to_string(),
            ));
        };

        let mut report = BatchReport::default();
        for item in items {
            match item {
                Value::String(name) if !name.is_empty() => self.merge_one(&name, &mut report),
                other => report.invalid.push(other.to_string()),
            }
        }
        Ok(report)
    }

    fn merge_one(&mut self, name: &str, report: &mut BatchReport) {
        if self.contains(name) {
            report.skipped.push(name.to_string());
        } else {
            self.clients.push(name.to_string());
            report.added.push(name.to_string());
        }
    }
}
