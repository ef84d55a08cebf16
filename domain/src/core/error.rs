//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is recoverable: callers render it next to the action that
/// triggered it and keep the form usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Client name cannot be empty")]
    EmptyClientName,

    #[error("Client '{0}' already exists")]
    DuplicateClient(String),

    #[error("Cannot remove the default client '{0}'")]
    ProtectedClient(String),

    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    #[error("Invalid client list: {0}")]
    ImportFormat(String),

    #[error("Client directory is not editable for this form")]
    DirectoryReadOnly,
}

impl DomainError {
    /// Check if this error came from parsing an imported client list
    pub fn is_import_format(&self) -> bool {
        matches!(self, DomainError::ImportFormat(_))
    }
}
