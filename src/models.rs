//! Data model for documents and validation reports.
//!
//! These types mirror the JSON returned by the validation API. Every field is
//! optional on the wire: absent and `null` values both deserialize to `None`
//! (or an empty collection), and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Identifier of the error group holding file-level (not activity-level) errors.
pub const FILE_IDENTIFIER: &str = "file";

/// One registry file tracked for download, validation and datastore indexing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub url: Option<String>,
    /// Display name; file-name sorting falls back to the name derived from `url`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub validation_created: Option<String>,
    #[serde(default)]
    pub downloaded: Option<String>,
    /// Download error code, stringified (the API sends numbers or strings).
    #[serde(default, deserialize_with = "deserialize_error_code")]
    pub download_error: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub solrize_end: Option<String>,
    #[serde(default)]
    pub last_solrize_end: Option<String>,
    #[serde(default)]
    pub clean_start: Option<String>,
    #[serde(default)]
    pub clean_end: Option<String>,
    #[serde(default)]
    pub clean_error: Option<String>,
    #[serde(default)]
    pub file_schema_valid: Option<bool>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub first_seen: Option<String>,
    #[serde(default)]
    pub report: Option<Report>,
}

/// Structured validation result for a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// `None` means the file has not been evaluated yet.
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub iati_version: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub errors: Vec<ErrorGroup>,
}

/// Message counts per severity as reported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub error: Option<u64>,
    #[serde(default)]
    pub warning: Option<u64>,
}

/// Errors for one activity, or for the whole file when `identifier` is `"file"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorGroup {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub errors: Vec<CategoryErrorGroup>,
}

impl ErrorGroup {
    pub fn is_file(&self) -> bool {
        self.identifier == FILE_IDENTIFIER
    }
}

/// Errors within one category of an [`ErrorGroup`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryErrorGroup {
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub errors: Vec<ErrorItem>,
}

/// A single rule violation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub context: Vec<ErrorContext>,
}

/// Location information for an [`ErrorItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    #[serde(default)]
    pub text: Option<String>,
}

/// One entry of a validation session, as flattened by the CSV export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    pub registry_name: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub report: Option<Report>,
}

/// Treats `null` like an absent array.
fn deserialize_null_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a download error code as a number or a string.
fn deserialize_error_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Unexpected};

    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Bool(b)) => Err(de::Error::invalid_type(
            Unexpected::Bool(b),
            &"a number or string error code",
        )),
        Some(_) => Err(de::Error::invalid_type(
            Unexpected::Other("array or object"),
            &"a number or string error code",
        )),
    }
}
