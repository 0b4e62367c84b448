//! Error handling.
//!
//! This module provides the error types for the fallible edges of the crate:
//! - Logger initialization
//! - Loading JSON snapshots
//! - CSV export

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError, SnapshotError};
