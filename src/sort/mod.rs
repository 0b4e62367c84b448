//! Sorting document lists and building the sort menu.

mod criteria;
mod documents;
mod options;

pub use criteria::{SortCriteria, SortDirection, SortKey};
pub use documents::sort_documents;
pub use options::{
    default_sorting_criteria, document_count, document_validation_statuses, find_sort_option,
    sort_options, validation_status_label, SortOption,
};
