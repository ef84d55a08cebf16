//! Domain layer for content-request
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Content request
//!
//! Raw [`FormFields`] are validated into an immutable [`ContentRequest`],
//! which the [`PayloadBuilder`] turns into the JSON body and headers posted
//! to a webhook.
//!
//! ## Client directory
//!
//! - **Static**: seeded in-memory list, editable for the session
//! - **Remote**: fetched from a record store once per session
//!
//! ## Variants
//!
//! [`FormVariant`] decides which fields are collected and which payload keys
//! and headers are emitted.

pub mod config;
pub mod core;
pub mod directory;
pub mod form;
pub mod request;
pub mod session;
pub mod submission;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use directory::{
    entry::ClientEntry,
    remote::{DirectoryFetch, RemoteDirectoryCache},
    static_list::{BatchReport, DEFAULT_CLIENT, StaticClientDirectory},
};
pub use form::{action::SubmitAction, variant::FormVariant};
pub use request::{
    entities::{
        ContentRequest, DEFAULT_WORD_COUNT, FormFields, MAX_WORD_COUNT, MIN_WORD_COUNT,
        WORD_COUNT_STEP,
    },
    payload::{
        DEFAULT_USER_AGENT, PayloadBuilder, REQUEST_TYPE, SubmissionTimestamp, WebhookHeaders,
        WebhookPayload, WebhookSubmission,
    },
    validation::{ValidationIssue, is_valid_email, validate},
};
pub use session::context::{ClientDirectory, SessionContext};
pub use submission::outcome::{ResponseBody, SubmissionResult, SubmissionStatus};
