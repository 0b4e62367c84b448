//! Sort option menu and status summaries for document lists.

use strum::IntoEnumIterator;

use super::criteria::{SortCriteria, SortDirection, SortKey};
use crate::config::VALIDATION_STATUS_LABEL_PREFIX;
use crate::document::{validation_status, StatusCaption};
use crate::models::Document;

/// One entry of the sort menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    pub label: String,
    pub criteria: SortCriteria,
}

impl SortOption {
    fn new(label: impl Into<String>, criteria: SortCriteria) -> Self {
        Self {
            label: label.into(),
            criteria,
        }
    }

    pub fn value(&self) -> SortKey {
        self.criteria.key()
    }

    pub fn direction(&self) -> &'static str {
        self.criteria.direction()
    }
}

/// Menu label of the status option for `caption`.
pub fn validation_status_label(caption: StatusCaption) -> String {
    format!("{}{}", VALIDATION_STATUS_LABEL_PREFIX, caption)
}

fn fixed_sort_options() -> Vec<SortOption> {
    use SortDirection::{Ascending, Descending};

    vec![
        SortOption::new("File Name: A - Z", SortCriteria::FileName(Ascending)),
        SortOption::new("File Name: Z - A", SortCriteria::FileName(Descending)),
        SortOption::new(
            "Identified in Registry: Newest",
            SortCriteria::RegistryIdentity(Descending),
        ),
        SortOption::new(
            "Identified in Registry: Oldest",
            SortCriteria::RegistryIdentity(Ascending),
        ),
        SortOption::new("Validated: Newest", SortCriteria::ValidationDate(Descending)),
        SortOption::new("Validated: Oldest", SortCriteria::ValidationDate(Ascending)),
        SortOption::new(
            "Available in IATI Datastore: Newest",
            SortCriteria::DataStoreAvailability(Descending),
        ),
        SortOption::new(
            "Available in IATI Datastore: Oldest",
            SortCriteria::DataStoreAvailability(Ascending),
        ),
    ]
}

/// Statuses present among `documents`, most severe first.
pub fn document_validation_statuses(documents: &[Document]) -> Vec<StatusCaption> {
    let observed: Vec<StatusCaption> = documents
        .iter()
        .map(|doc| validation_status(doc).caption)
        .collect();
    StatusCaption::iter()
        .filter(|caption| observed.contains(caption))
        .collect()
}

/// Number of documents whose validation status is `caption`.
pub fn document_count(documents: &[Document], caption: StatusCaption) -> usize {
    documents
        .iter()
        .filter(|doc| validation_status(doc).caption == caption)
        .count()
}

/// Builds the sort menu: eight fixed options, then one option per status
/// present among `documents`.
pub fn sort_options(documents: &[Document]) -> Vec<SortOption> {
    let mut options = fixed_sort_options();
    options.extend(
        document_validation_statuses(documents)
            .into_iter()
            .map(|caption| {
                SortOption::new(
                    validation_status_label(caption),
                    SortCriteria::ValidationStatus(caption),
                )
            }),
    );
    options
}

/// Label of the option selected by default: the most severe status present.
///
/// Returns `None` for an empty list.
pub fn default_sorting_criteria(documents: &[Document]) -> Option<String> {
    if documents.is_empty() {
        return None;
    }
    let caption = document_validation_statuses(documents)
        .into_iter()
        .next()
        .unwrap_or(StatusCaption::NotApplicable);
    Some(validation_status_label(caption))
}

/// Looks up a menu entry by its label.
pub fn find_sort_option<'a>(label: &str, options: &'a [SortOption]) -> Option<&'a SortOption> {
    if label.is_empty() {
        return None;
    }
    options.iter().find(|opt| opt.label == label)
}
