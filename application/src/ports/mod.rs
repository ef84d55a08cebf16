//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod clock;
pub mod directory_source;
pub mod progress;
pub mod submission_logger;
pub mod webhook_gateway;
