//! Command implementations for Roster CLI

pub mod completions;
pub mod session;
pub mod version;
