//! Download status of documents that have not been validated yet.

use crate::config::{
    DOWNLOAD_ERROR_CONNECTION, DOWNLOAD_ERROR_ENCODING, DOWNLOAD_ERROR_INVALID_URL,
    DOWNLOAD_ERROR_SSL, DOWNLOAD_HTTP_ERROR_CODES,
};
use crate::models::Document;

/// Describes why a document is still waiting for a validation report.
///
/// # Returns
///
/// - `"Pending Validation"` when the file was downloaded but not yet validated
/// - a `"Failed Download (...)"` message for a recognised download error code
/// - `"Pending Download"` for any other (or no) error code
/// - `None` once the document has been validated: no download status applies
pub fn download_status(doc: &Document) -> Option<String> {
    if doc.validation_created.is_some() {
        return None;
    }
    if doc.downloaded.is_some() {
        return Some("Pending Validation".to_string());
    }

    let code = doc.download_error.as_deref().unwrap_or_default();
    let status = match code {
        DOWNLOAD_ERROR_CONNECTION => "Failed Download (Connection Error)".to_string(),
        DOWNLOAD_ERROR_SSL => "Failed Download (SSL Issue)".to_string(),
        DOWNLOAD_ERROR_ENCODING => "Failed Download (Character Encoding Issue)".to_string(),
        DOWNLOAD_ERROR_INVALID_URL => "Failed Download (Invalid URL)".to_string(),
        http if DOWNLOAD_HTTP_ERROR_CODES.contains(&http) => {
            format!("Failed Download (HTTP Error {})", http)
        }
        _ => "Pending Download".to_string(),
    };
    Some(status)
}
