//! Selecting file-level and activity-level errors from a report.

use crate::models::{CategoryErrorGroup, ErrorGroup, Report, FILE_IDENTIFIER};

/// Errors selected by [`report_errors_by_identifier`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReportErrors<'a> {
    /// Category groups of the file-level error group.
    File(&'a [CategoryErrorGroup]),
    /// Every activity-level error group.
    Activities(Vec<&'a ErrorGroup>),
}

impl ReportErrors<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            ReportErrors::File(groups) => groups.is_empty(),
            ReportErrors::Activities(groups) => groups.is_empty(),
        }
    }
}

/// Category groups of the report's file-level error group, empty if absent.
pub fn file_errors(report: &Report) -> &[CategoryErrorGroup] {
    report
        .errors
        .iter()
        .rev()
        .find(|group| group.is_file())
        .map(|group| group.errors.as_slice())
        .unwrap_or_default()
}

/// All error groups that belong to activities rather than the file.
pub fn activity_errors(report: &Report) -> Vec<&ErrorGroup> {
    report.errors.iter().filter(|group| !group.is_file()).collect()
}

/// Selects file-level errors when `identifier` is `"file"`, otherwise all
/// activity-level error groups. A missing report yields no errors.
pub fn report_errors_by_identifier<'a>(
    report: Option<&'a Report>,
    identifier: &str,
) -> ReportErrors<'a> {
    match (report, identifier == FILE_IDENTIFIER) {
        (None, true) => ReportErrors::File(&[]),
        (None, false) => ReportErrors::Activities(Vec::new()),
        (Some(report), true) => ReportErrors::File(file_errors(report)),
        (Some(report), false) => ReportErrors::Activities(activity_errors(report)),
    }
}

/// Counts the locations (context entries) of errors with the given severity.
pub fn file_errors_message_type_count(groups: &[CategoryErrorGroup], severity: &str) -> usize {
    groups
        .iter()
        .flat_map(|group| &group.errors)
        .filter(|item| item.severity == severity)
        .map(|item| item.context.len())
        .sum()
}
