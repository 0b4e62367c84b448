//! Application initialization.
//!
//! The derivation core is pure and needs no setup; only the binary installs
//! a logger before running a subcommand.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
