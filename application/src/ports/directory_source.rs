//! Client directory source port.
//!
//! Infrastructure adapters implement this to query an external record store
//! for the selectable client names.

use async_trait::async_trait;
use content_request_domain::DirectoryFetch;
use thiserror::Error;

/// Errors that can occur while querying the record store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The store could not be reached
    #[error("Record store unreachable: {0}")]
    Unreachable(String),

    /// The store answered with a non-success status
    #[error("Record store returned status {0}")]
    Status(u16),

    /// The body was not valid JSON
    #[error("Malformed record store response: {0}")]
    Malformed(String),
}

/// Port for fetching the client directory.
#[async_trait]
pub trait ClientDirectorySource: Send + Sync {
    /// Query the store once.
    ///
    /// Returns `Loaded` or `Empty` on a usable answer; never `Failed` (errors
    /// are reported through `Err`).
    async fn fetch(&self) -> Result<DirectoryFetch, DirectoryError>;
}
