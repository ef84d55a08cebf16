//! Submission outcomes
//!
//! Maps what happened on the wire to the user-visible status of one
//! submit action.

pub mod outcome;
