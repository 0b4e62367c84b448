//! Datastore availability of a document.
//!
//! Availability follows a fixed priority order agreed with the datastore team:
//! an indexed file is available (fully or partially), an older indexed version
//! beats no version, files the cleaner cannot rescue are never indexed, and
//! files still moving through the pipeline are pending.

use std::fmt;

use super::is_set;
use super::status::{validation_status, StatusCaption};
use crate::config::{
    CLEAN_ERROR_NO_VALID_ACTIVITIES, FILE_TYPE_ACTIVITIES, FILE_TYPE_ORGANISATIONS,
    LEGACY_IATI_VERSION, RECOVERABLE_VERSION_ERROR_IDS,
};
use crate::models::{Document, ErrorGroup};
use crate::utils::format_date;

/// Whether and how a document is available in the datastore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatastoreAvailability {
    /// Fully indexed; carries the formatted indexing date.
    Yes(String),
    /// Indexed after cleaning removed invalid activities; carries the date.
    Partial(String),
    /// A previous version of the file is indexed.
    OldVersion,
    /// The file will not be indexed.
    No,
    /// The file is still moving through the pipeline.
    Pending,
    /// Organisation files are not indexed.
    NotApplicable,
    /// No determination possible.
    Unknown,
}

impl DatastoreAvailability {
    /// True only for fully indexed documents.
    pub fn is_available(&self) -> bool {
        matches!(self, DatastoreAvailability::Yes(_))
    }
}

impl fmt::Display for DatastoreAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatastoreAvailability::Yes(date) => write!(f, "Yes - {}", date),
            DatastoreAvailability::Partial(date) => write!(f, "Partial - {}", date),
            DatastoreAvailability::OldVersion => f.write_str("Old version"),
            DatastoreAvailability::No => f.write_str("No"),
            DatastoreAvailability::Pending => f.write_str("Pending"),
            DatastoreAvailability::NotApplicable => f.write_str("N/A"),
            DatastoreAvailability::Unknown => Ok(()),
        }
    }
}

/// Derives the datastore availability of a document.
pub fn datastore_availability(doc: &Document) -> DatastoreAvailability {
    let critical = validation_status(doc).caption == StatusCaption::Critical;
    let report = doc.report.as_ref();
    let file_type = report.and_then(|r| r.file_type.as_deref());
    let is_activities = file_type == Some(FILE_TYPE_ACTIVITIES);

    if let Some(solrize_end) = doc.solrize_end.as_deref().filter(|s| !s.is_empty()) {
        let date = format_date(solrize_end);
        let schema_valid = doc.file_schema_valid.unwrap_or(false);
        return if critical && is_set(&doc.clean_end) && !schema_valid {
            DatastoreAvailability::Partial(date)
        } else {
            DatastoreAvailability::Yes(date)
        };
    }

    if is_set(&doc.last_solrize_end) {
        return DatastoreAvailability::OldVersion;
    }

    let clean_started = is_set(&doc.clean_start);
    if critical
        && ((is_activities && !clean_started)
            || doc.clean_error.as_deref() == Some(CLEAN_ERROR_NO_VALID_ACTIVITIES)
            || file_type == Some(""))
    {
        return DatastoreAvailability::No;
    }

    let recoverable_version = || {
        let version = report.and_then(|r| r.iati_version.as_deref());
        version != Some("")
            && version != Some(LEGACY_IATI_VERSION)
            && report.is_some_and(|r| has_recoverable_version_error(&r.errors))
    };
    if (is_activities && !critical)
        || (is_activities && critical && !clean_started && recoverable_version())
        || (critical && is_set(&doc.clean_end))
    {
        return DatastoreAvailability::Pending;
    }

    if file_type == Some(FILE_TYPE_ORGANISATIONS) {
        return DatastoreAvailability::NotApplicable;
    }

    DatastoreAvailability::Unknown
}

/// Matches error groups by identifier, the way the validator files version errors.
fn has_recoverable_version_error(groups: &[ErrorGroup]) -> bool {
    groups
        .iter()
        .any(|group| RECOVERABLE_VERSION_ERROR_IDS.contains(&group.identifier.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Report;

    fn critical_doc(file_type: &str) -> Document {
        Document {
            report: Some(Report {
                valid: Some(false),
                file_type: Some(file_type.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn ok_doc(file_type: &str) -> Document {
        Document {
            report: Some(Report {
                valid: Some(true),
                summary: Some(crate::models::Summary {
                    error: Some(0),
                    warning: Some(0),
                }),
                file_type: Some(file_type.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_indexed_document_is_available() {
        let mut doc = ok_doc(FILE_TYPE_ACTIVITIES);
        doc.solrize_end = Some("2024-03-05T10:30:00Z".to_string());
        let availability = datastore_availability(&doc);
        assert!(availability.is_available());
        assert_eq!(availability.to_string(), "Yes - 05 Mar 2024 10:30");
    }

    #[test]
    fn test_cleaned_critical_document_is_partial() {
        let mut doc = critical_doc(FILE_TYPE_ACTIVITIES);
        doc.solrize_end = Some("2024-03-05T10:30:00Z".to_string());
        doc.clean_end = Some("2024-03-05T10:00:00Z".to_string());
        doc.file_schema_valid = Some(false);
        let availability = datastore_availability(&doc);
        assert!(!availability.is_available());
        assert_eq!(availability.to_string(), "Partial - 05 Mar 2024 10:30");
    }

    #[test]
    fn test_old_version() {
        let mut doc = critical_doc(FILE_TYPE_ACTIVITIES);
        doc.last_solrize_end = Some("2023-01-01T00:00:00Z".to_string());
        assert_eq!(
            datastore_availability(&doc),
            DatastoreAvailability::OldVersion
        );
    }

    #[test]
    fn test_critical_activities_without_cleaning_is_no() {
        assert_eq!(
            datastore_availability(&critical_doc(FILE_TYPE_ACTIVITIES)),
            DatastoreAvailability::No
        );
        assert_eq!(
            datastore_availability(&critical_doc("")),
            DatastoreAvailability::No
        );

        let mut doc = critical_doc(FILE_TYPE_ORGANISATIONS);
        doc.clean_error = Some(CLEAN_ERROR_NO_VALID_ACTIVITIES.to_string());
        assert_eq!(datastore_availability(&doc), DatastoreAvailability::No);
    }

    #[test]
    fn test_non_critical_activities_pending() {
        assert_eq!(
            datastore_availability(&ok_doc(FILE_TYPE_ACTIVITIES)),
            DatastoreAvailability::Pending
        );
    }

    #[test]
    fn test_critical_cleaned_is_pending() {
        let mut doc = critical_doc(FILE_TYPE_ORGANISATIONS);
        doc.clean_start = Some("2024-03-05T09:00:00Z".to_string());
        doc.clean_end = Some("2024-03-05T10:00:00Z".to_string());
        assert_eq!(datastore_availability(&doc), DatastoreAvailability::Pending);
    }

    #[test]
    fn test_organisation_file() {
        assert_eq!(
            datastore_availability(&ok_doc(FILE_TYPE_ORGANISATIONS)),
            DatastoreAvailability::NotApplicable
        );
        assert_eq!(DatastoreAvailability::NotApplicable.to_string(), "N/A");
    }

    #[test]
    fn test_no_report_is_unknown() {
        let availability = datastore_availability(&Document::default());
        assert_eq!(availability, DatastoreAvailability::Unknown);
        assert_eq!(availability.to_string(), "");
    }

    #[test]
    fn test_recoverable_version_error_detection() {
        let groups = vec![ErrorGroup {
            identifier: "0.6.1".to_string(),
            ..Default::default()
        }];
        assert!(has_recoverable_version_error(&groups));
        assert!(!has_recoverable_version_error(&[]));
    }
}
