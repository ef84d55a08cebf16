//! Configuration file loading for content-request
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./content-request.toml` or `./.content-request.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/content-request/config.toml`
//! 4. Fallback: `~/.config/content-request/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDirectoryConfig, FileFormConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileRecordStoreConfig, FileReplConfig, FileWebhookConfig,
};
pub use loader::ConfigLoader;
