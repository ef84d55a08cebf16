//! Session-scoped state
//!
//! One [`SessionContext`](context::SessionContext) lives for one user's use
//! of the form and is dropped with it; nothing in it is shared between
//! sessions.

pub mod context;
