//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with ports.

pub mod load_directory;
pub mod submit_request;
