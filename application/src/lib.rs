//! Application layer for content-request
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_TIMEOUT, SubmissionParams};
pub use ports::{
    clock::{Clock, FixedClock, SystemClock},
    directory_source::{ClientDirectorySource, DirectoryError},
    progress::{NoProgress, SubmissionProgress},
    submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger},
    webhook_gateway::{TransportError, WebhookGateway, WebhookResponse},
};
pub use use_cases::load_directory::{DirectoryLoad, LoadDirectoryError, LoadDirectoryUseCase};
pub use use_cases::submit_request::{SubmitError, SubmitRequestUseCase};
