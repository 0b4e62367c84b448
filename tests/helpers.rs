// Shared test helpers for building document and report fixtures.
//
// Fixtures are built from JSON so they exercise the same deserialization path
// as snapshots from the validation API.

use iati_validator::{Document, Report, ValidationResult};
use serde_json::{json, Value};

/// Deserializes a document fixture.
#[allow(dead_code)] // Used by other test files
pub fn document(value: Value) -> Document {
    serde_json::from_value(value).expect("Failed to deserialize document fixture")
}

/// Deserializes a report fixture.
#[allow(dead_code)]
pub fn report(value: Value) -> Report {
    serde_json::from_value(value).expect("Failed to deserialize report fixture")
}

/// Deserializes a validation result fixture.
#[allow(dead_code)]
pub fn validation_result(value: Value) -> ValidationResult {
    serde_json::from_value(value).expect("Failed to deserialize validation result fixture")
}

/// A validated document with the given name and report verdict.
///
/// `valid: None` produces a document whose report has not been evaluated.
#[allow(dead_code)]
pub fn validated_document(name: &str, valid: Option<bool>, error: u64, warning: u64) -> Document {
    document(json!({
        "name": name,
        "url": format!("https://example.org/{}", name),
        "hash": format!("hash-{}", name),
        "validation_created": "2024-01-01T00:00:00Z",
        "downloaded": "2024-01-01T00:00:00Z",
        "report": {
            "valid": valid,
            "summary": { "error": error, "warning": warning },
            "fileType": "iati-activities",
            "iatiVersion": "2.03",
            "errors": []
        }
    }))
}

/// A document with no report yet.
#[allow(dead_code)]
pub fn unreported_document(name: &str) -> Document {
    document(json!({
        "name": name,
        "url": format!("https://example.org/{}", name),
        "hash": format!("hash-{}", name),
        "validation_created": null,
        "downloaded": null,
        "report": null
    }))
}

/// File names of `docs`, in order.
#[allow(dead_code)]
pub fn names(docs: &[Document]) -> Vec<String> {
    docs.iter().map(iati_validator::document::display_name).collect()
}
