//! CLI library components for Bulk Reviewer.

pub mod actions;
pub mod logging;
