//! Application configuration and constants.
//!
//! This module provides:
//! - Lookup tables used by the derivation functions
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Command, LogFormat, LogLevel, Opt};
