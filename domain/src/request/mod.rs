//! Content request subdomain
//!
//! - [`entities`]: raw form fields and the validated [`ContentRequest`](entities::ContentRequest)
//! - [`validation`]: ordered required-field and email checks
//! - [`payload`]: webhook JSON body and header construction

pub mod entities;
pub mod payload;
pub mod validation;
