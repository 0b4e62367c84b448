//! Export functionality for validation results.
//!
//! This module flattens validation reports into CSV, either as an in-memory
//! string (for download) or written to a file or stdout.

mod csv;

pub use self::csv::{construct_csv, export_csv, CSV_HEADER};
