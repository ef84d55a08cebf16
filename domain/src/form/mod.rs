//! Form variants and the submit event.
//!
//! A deployment picks one [`FormVariant`] at startup. The variant decides
//! which fields the form collects and which headers and payload keys are
//! emitted; it is never switched while a session is running.

pub mod action;
pub mod variant;
