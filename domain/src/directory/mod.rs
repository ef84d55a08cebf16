//! Client directory subdomain
//!
//! The list of selectable client names comes from one of two strategies,
//! chosen by the deployed [`FormVariant`](crate::form::variant::FormVariant):
//!
//! - [`static_list::StaticClientDirectory`]: seeded in memory, editable for
//!   the rest of the session
//! - [`remote::RemoteDirectoryCache`]: fetched once per session from an
//!   external record store, read-only

pub mod entry;
pub mod remote;
pub mod static_list;
