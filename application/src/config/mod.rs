//! Application-level configuration.
//!
//! - [`SubmissionParams`]: webhook target, timeout and client identity for
//!   the submit use case

pub mod submission_params;

pub use submission_params::{DEFAULT_TIMEOUT, SubmissionParams};
