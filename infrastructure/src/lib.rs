//! Infrastructure layer for content-request
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod directory;
pub mod logging;
pub mod webhook;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDirectoryConfig, FileFormConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileRecordStoreConfig, FileReplConfig, FileWebhookConfig,
};
pub use directory::{RecordStoreDirectorySource, RecordStoreSettings};
pub use logging::JsonlSubmissionLogger;
pub use webhook::HttpWebhookGateway;
