//! Category and severity aggregation over validation reports.
//!
//! All functions read a [`Report`](crate::models::Report) and build new
//! display records; the report itself is never modified.

mod categories;
mod errors;
mod severities;

pub use categories::{category_label, report_categories, Category, ReportCategory};
pub use errors::{
    activity_errors, file_errors, file_errors_message_type_count, report_errors_by_identifier,
    ReportErrors,
};
pub use severities::{report_severities, severities, MessageType, Severity, SeverityLevel};
