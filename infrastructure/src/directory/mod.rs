//! Client directory sources

mod record_store;

pub use record_store::{RecordStoreDirectorySource, RecordStoreSettings};
