//! Shared utilities for the member registry.
//!
//! Logger initialization and time helpers used by every binary in the workspace.

pub mod logger;
pub mod time;
