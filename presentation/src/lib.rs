//! Presentation layer for content-request
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive form.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, SubmitArgs, VariantArg};
pub use config::{OutputConfig, ReplConfig};
pub use form::{FormCommand, FormField, FormRepl};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};
