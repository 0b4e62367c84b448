//! iati_validator library: report derivation for the IATI Validator dashboard
//!
//! The validation API returns document and report JSON; this library turns
//! those snapshots into what the dashboard displays:
//!
//! - validation, download and datastore status of each document
//! - error categories and severities with counts
//! - sort orders and the sort menu for document lists
//! - a flattened CSV export of validation results
//!
//! Every derivation is a pure function over already-parsed values.
//!
//! # Example
//!
//! ```
//! use iati_validator::{validation_status, Document, StatusCaption};
//!
//! let doc: Document = serde_json::from_str(r#"{
//!     "url": "https://example.org/activities.xml",
//!     "report": { "valid": true, "summary": { "error": 0, "warning": 0 } }
//! }"#).unwrap();
//!
//! assert_eq!(validation_status(&doc).caption, StatusCaption::Success);
//! ```

pub mod config;
pub mod document;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod report;
pub mod snapshot;
pub mod sort;
pub mod utils;

// Re-export public API
pub use document::{
    datastore_availability, document_file_name, download_status, validation_status,
    DatastoreAvailability, StatusCaption, ValidationStatus,
};
pub use export::{construct_csv, export_csv};
pub use models::{
    CategoryErrorGroup, Document, ErrorContext, ErrorGroup, ErrorItem, Report, Summary,
    ValidationResult,
};
pub use report::{report_categories, report_severities, severities};
pub use sort::{default_sorting_criteria, sort_documents, sort_options, SortCriteria};
pub use utils::contains_quoted_trailing_whitespace;
