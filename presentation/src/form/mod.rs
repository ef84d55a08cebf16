//! Interactive content request form
//!
//! A rustyline REPL over a [`SessionContext`](content_request_domain::SessionContext):
//! fields are filled with `/set`, the client directory is managed with
//! `/add`, `/remove`, `/bulk`, `/export`, `/import` and `/reload`, and
//! `/submit` sends the request.

pub mod command;
pub mod field;
mod repl;

pub use command::{CommandError, FormCommand};
pub use field::{FieldError, FormField};
pub use repl::FormRepl;
