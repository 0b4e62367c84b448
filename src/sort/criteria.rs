//! Sort keys, directions and the criteria built from them.

use std::cmp::Ordering;
use std::fmt;

use crate::document::StatusCaption;

/// Column a document list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    FileName,
    RegistryIdentity,
    ValidationDate,
    ValidationStatus,
    DataStoreAvailability,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::FileName => "fileName",
            SortKey::RegistryIdentity => "registryIdentity",
            SortKey::ValidationDate => "validationDate",
            SortKey::ValidationStatus => "validationStatus",
            SortKey::DataStoreAvailability => "dataStoreAvailability",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "fileName" => Some(SortKey::FileName),
            "registryIdentity" => Some(SortKey::RegistryIdentity),
            "validationDate" => Some(SortKey::ValidationDate),
            "validationStatus" => Some(SortKey::ValidationStatus),
            "dataStoreAvailability" => Some(SortKey::DataStoreAvailability),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    /// Applies the direction to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// How to order a document list.
///
/// Ordered keys carry a direction. Status sorting instead carries the status
/// whose documents are pulled to the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriteria {
    FileName(SortDirection),
    RegistryIdentity(SortDirection),
    ValidationDate(SortDirection),
    DataStoreAvailability(SortDirection),
    ValidationStatus(StatusCaption),
}

impl SortCriteria {
    pub fn key(&self) -> SortKey {
        match self {
            SortCriteria::FileName(_) => SortKey::FileName,
            SortCriteria::RegistryIdentity(_) => SortKey::RegistryIdentity,
            SortCriteria::ValidationDate(_) => SortKey::ValidationDate,
            SortCriteria::DataStoreAvailability(_) => SortKey::DataStoreAvailability,
            SortCriteria::ValidationStatus(_) => SortKey::ValidationStatus,
        }
    }

    /// Builds criteria from the `(key, direction)` string pair used by the UI.
    ///
    /// For `validationStatus` the direction string is the target status caption
    /// (e.g. `"Critical"`). For every other key, `"ascending"` sorts ascending
    /// and any other value sorts descending. Unknown keys or captions yield `None`.
    pub fn parse(key: &str, direction: &str) -> Option<Self> {
        let ordered = if direction == SortDirection::Ascending.as_str() {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        let criteria = match SortKey::parse(key)? {
            SortKey::FileName => SortCriteria::FileName(ordered),
            SortKey::RegistryIdentity => SortCriteria::RegistryIdentity(ordered),
            SortKey::ValidationDate => SortCriteria::ValidationDate(ordered),
            SortKey::DataStoreAvailability => SortCriteria::DataStoreAvailability(ordered),
            SortKey::ValidationStatus => SortCriteria::ValidationStatus(direction.parse().ok()?),
        };
        Some(criteria)
    }

    /// The direction string of the UI pair: a direction, or a status caption.
    pub fn direction(&self) -> &'static str {
        match self {
            SortCriteria::FileName(d)
            | SortCriteria::RegistryIdentity(d)
            | SortCriteria::ValidationDate(d)
            | SortCriteria::DataStoreAvailability(d) => d.as_str(),
            SortCriteria::ValidationStatus(caption) => caption.as_str(),
        }
    }
}
