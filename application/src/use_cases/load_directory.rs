//! Load directory use case
//!
//! Fetches the remote client directory at most once per session:
//!
//! - [`ensure_loaded`](LoadDirectoryUseCase::ensure_loaded) returns the
//!   cached result when present, otherwise queries the store and caches the
//!   answer (including a failed one)
//! - [`reload`](LoadDirectoryUseCase::reload) drops the cache and queries again
//!
//! A failed query is surfaced as [`DirectoryFetch::Failed`]; the session then
//! offers no entries and accepts a free-text client name.

use crate::ports::directory_source::ClientDirectorySource;
use crate::ports::progress::{NoProgress, SubmissionProgress};
use crate::ports::submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger};
use content_request_domain::{DirectoryFetch, SessionContext};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors from the load directory use case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadDirectoryError {
    /// The session's variant does not use a remote directory.
    #[error("This form does not use a remote client directory")]
    NotRemote,
}

/// What a load produced
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryLoad {
    pub fetch: DirectoryFetch,
    /// True when no query was made
    pub from_cache: bool,
}

/// Use case for loading the session's remote client directory.
pub struct LoadDirectoryUseCase {
    source: Arc<dyn ClientDirectorySource>,
    logger: Arc<dyn SubmissionLogger>,
}

impl LoadDirectoryUseCase {
    pub fn new(source: Arc<dyn ClientDirectorySource>) -> Self {
        Self {
            source,
            logger: Arc::new(NoSubmissionLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Load once per session; later calls reuse the cache
    pub async fn ensure_loaded(
        &self,
        session: &mut SessionContext,
    ) -> Result<DirectoryLoad, LoadDirectoryError> {
        self.ensure_loaded_with_progress(session, &NoProgress).await
    }

    pub async fn ensure_loaded_with_progress(
        &self,
        session: &mut SessionContext,
        progress: &dyn SubmissionProgress,
    ) -> Result<DirectoryLoad, LoadDirectoryError> {
        let cache = session
            .remote_cache_mut()
            .ok_or(LoadDirectoryError::NotRemote)?;

        if let Some(fetch) = cache.get() {
            return Ok(DirectoryLoad {
                fetch: fetch.clone(),
                from_cache: true,
            });
        }

        progress.on_directory_fetch_start();
        let fetch = match self.source.fetch().await {
            Ok(fetch) => fetch,
            Err(e) => {
                warn!("Client directory fetch failed: {}", e);
                DirectoryFetch::Failed(e.to_string())
            }
        };
        progress.on_directory_fetch_complete(&fetch);

        info!("Client directory loaded ({} entries)", fetch.entries().len());
        self.logger.log(SubmissionEvent::new(
            "directory_loaded",
            json!({
                "entries": fetch.entries().len(),
                "error": fetch.error(),
            }),
        ));

        cache.store(fetch.clone());
        Ok(DirectoryLoad {
            fetch,
            from_cache: false,
        })
    }

    /// Clear the session cache and query again
    pub async fn reload(
        &self,
        session: &mut SessionContext,
    ) -> Result<DirectoryLoad, LoadDirectoryError> {
        self.reload_with_progress(session, &NoProgress).await
    }

    pub async fn reload_with_progress(
        &self,
        session: &mut SessionContext,
        progress: &dyn SubmissionProgress,
    ) -> Result<DirectoryLoad, LoadDirectoryError> {
        session
            .remote_cache_mut()
            .ok_or(LoadDirectoryError::NotRemote)?
            .clear();
        self.ensure_loaded_with_progress(session, progress).await
    }
}
