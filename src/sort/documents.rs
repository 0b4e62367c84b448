//! Ordering document lists.

use super::criteria::{SortCriteria, SortDirection};
use crate::document::{
    datastore_availability, display_name, is_set, validation_status, StatusCaption,
};
use crate::models::Document;

/// Sorts a copy of `documents` according to `criteria`.
///
/// Returns `None` for an empty list. All orderings are stable: documents with
/// equal keys keep their input order.
///
/// - `FileName`, `RegistryIdentity` (`modified`, else `first_seen`): documents
///   without a key are appended after the sorted ones.
/// - `ValidationDate`: documents not yet validated, and any document sharing a
///   hash with one, are appended unsorted regardless of direction.
/// - `ValidationStatus`: documents with the target status come first; the
///   rest follow with N/A documents last.
/// - `DataStoreAvailability`: fully indexed documents are sorted by indexing
///   date; the rest are appended unsorted.
pub fn sort_documents(documents: &[Document], criteria: SortCriteria) -> Option<Vec<Document>> {
    if documents.is_empty() {
        return None;
    }
    log::debug!(
        "Sorting {} documents by {} ({})",
        documents.len(),
        criteria.key(),
        criteria.direction()
    );

    let sorted = match criteria {
        SortCriteria::FileName(direction) => {
            sort_by_key_missing_last(documents, direction, |doc| {
                Some(display_name(doc)).filter(|name| !name.is_empty())
            })
        }
        SortCriteria::RegistryIdentity(direction) => {
            sort_by_key_missing_last(documents, direction, |doc| {
                doc.modified
                    .clone()
                    .filter(|s| !s.is_empty())
                    .or_else(|| doc.first_seen.clone().filter(|s| !s.is_empty()))
            })
        }
        SortCriteria::ValidationDate(direction) => sort_by_validation_date(documents, direction),
        SortCriteria::ValidationStatus(target) => sort_by_validation_status(documents, target),
        SortCriteria::DataStoreAvailability(direction) => {
            let (available, rest): (Vec<&Document>, Vec<&Document>) = documents
                .iter()
                .partition(|doc| datastore_availability(doc).is_available());
            let mut sorted = sort_by_key_missing_last(available, direction, |doc| {
                doc.solrize_end.clone()
            });
            sorted.extend(rest.into_iter().cloned());
            sorted
        }
    };
    Some(sorted)
}

/// Stable sort on an optional string key; keyless documents go last in input order.
fn sort_by_key_missing_last<'a, I, F>(
    documents: I,
    direction: SortDirection,
    key: F,
) -> Vec<Document>
where
    I: IntoIterator<Item = &'a Document>,
    F: Fn(&Document) -> Option<String>,
{
    let mut keyed: Vec<(String, &Document)> = Vec::new();
    let mut keyless: Vec<&Document> = Vec::new();
    for doc in documents {
        match key(doc) {
            Some(k) => keyed.push((k, doc)),
            None => keyless.push(doc),
        }
    }
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));

    keyed
        .into_iter()
        .map(|(_, doc)| doc)
        .chain(keyless)
        .cloned()
        .collect()
}

fn sort_by_validation_date(documents: &[Document], direction: SortDirection) -> Vec<Document> {
    let pending_hashes: Vec<Option<&str>> = documents
        .iter()
        .filter(|doc| !is_set(&doc.validation_created))
        .map(|doc| doc.hash.as_deref())
        .collect();

    let (validated, rest): (Vec<&Document>, Vec<&Document>) =
        documents.iter().partition(|doc| {
            is_set(&doc.validation_created) && !pending_hashes.contains(&doc.hash.as_deref())
        });

    let mut sorted = sort_by_key_missing_last(validated, direction, |doc| {
        doc.validation_created.clone()
    });
    sorted.extend(rest.into_iter().cloned());
    sorted
}

fn sort_by_validation_status(documents: &[Document], target: StatusCaption) -> Vec<Document> {
    let (mut front, rest): (Vec<&Document>, Vec<&Document>) = documents
        .iter()
        .partition(|doc| validation_status(doc).caption == target);

    if target == StatusCaption::NotApplicable {
        front.extend(rest);
    } else {
        let (others, not_applicable): (Vec<&Document>, Vec<&Document>) = rest
            .into_iter()
            .partition(|doc| validation_status(doc).caption != StatusCaption::NotApplicable);
        front.extend(others);
        front.extend(not_applicable);
    }
    front.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Document {
        Document {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn names(docs: &[Document]) -> Vec<String> {
        docs.iter().map(display_name).collect()
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(
            sort_documents(&[], SortCriteria::FileName(SortDirection::Ascending)),
            None
        );
        assert_eq!(
            sort_documents(&[], SortCriteria::ValidationStatus(StatusCaption::Critical)),
            None
        );
    }

    #[test]
    fn test_file_name_directions() {
        let docs = vec![named("b.xml"), named("a.xml")];
        let asc = sort_documents(&docs, SortCriteria::FileName(SortDirection::Ascending))
            .expect("non-empty");
        assert_eq!(names(&asc), vec!["a.xml", "b.xml"]);
        let desc = sort_documents(&docs, SortCriteria::FileName(SortDirection::Descending))
            .expect("non-empty");
        assert_eq!(names(&desc), vec!["b.xml", "a.xml"]);
    }

    #[test]
    fn test_file_name_stable_on_ties() {
        let mut first = named("same.xml");
        first.hash = Some("1".to_string());
        let mut second = named("same.xml");
        second.hash = Some("2".to_string());
        let sorted = sort_documents(
            &[first, second],
            SortCriteria::FileName(SortDirection::Descending),
        )
        .expect("non-empty");
        assert_eq!(sorted[0].hash.as_deref(), Some("1"));
        assert_eq!(sorted[1].hash.as_deref(), Some("2"));
    }

    #[test]
    fn test_registry_identity_falls_back_to_first_seen() {
        let mut a = named("a.xml");
        a.modified = Some("2024-03-01".to_string());
        let mut b = named("b.xml");
        b.first_seen = Some("2024-01-01".to_string());
        let c = named("c.xml");
        let sorted = sort_documents(
            &[a, b, c],
            SortCriteria::RegistryIdentity(SortDirection::Descending),
        )
        .expect("non-empty");
        assert_eq!(names(&sorted), vec!["a.xml", "b.xml", "c.xml"]);
    }

    #[test]
    fn test_input_not_modified() {
        let docs = vec![named("b.xml"), named("a.xml")];
        let _ = sort_documents(&docs, SortCriteria::FileName(SortDirection::Ascending));
        assert_eq!(names(&docs), vec!["b.xml", "a.xml"]);
    }
}
