//! Status derivation for registry documents.
//!
//! This module provides:
//! - File name extraction from document URLs
//! - Validation status and severity rank
//! - Download status for documents awaiting validation
//! - Datastore availability

mod availability;
mod download;
mod status;

use std::borrow::Cow;

use crate::models::Document;

pub use availability::{datastore_availability, DatastoreAvailability};
pub use download::download_status;
pub use status::{
    compare_document_severity, severity_rank, validation_status, StatusCaption, ValidationStatus,
};

/// Bytes whose escapes stay encoded in a file name, so `%2F` never splits it.
const RESERVED_ESCAPE_BYTES: &[u8] = b";/?:@&=+$,#";

/// Extracts the file name from a document URL.
///
/// Takes the last path segment after stripping one trailing slash, then
/// percent-decodes it. Escapes of reserved characters (`%2F`, `%3F`, `%23`
/// and the like) are left encoded. Returns an empty string when the document
/// has no URL. Malformed escapes are kept as they are.
pub fn document_file_name(doc: &Document) -> String {
    let Some(url) = doc.url.as_deref().filter(|u| !u.is_empty()) else {
        return String::new();
    };
    let path = url.strip_suffix('/').unwrap_or(url);
    decode_segment(path.rsplit('/').next().unwrap_or_default())
}

fn decode_segment(segment: &str) -> String {
    let mut decoded = String::with_capacity(segment.len());
    let mut start = 0;
    let mut i = 0;
    while i < segment.len() {
        if is_reserved_escape(&segment.as_bytes()[i..]) {
            decoded.push_str(&decode_chunk(&segment[start..i]));
            decoded.push_str(&segment[i..i + 3]);
            i += 3;
            start = i;
        } else {
            i += 1;
        }
    }
    decoded.push_str(&decode_chunk(&segment[start..]));
    decoded
}

fn is_reserved_escape(bytes: &[u8]) -> bool {
    match bytes {
        [b'%', hi, lo, ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
            let value = (hex_value(*hi) << 4) | hex_value(*lo);
            RESERVED_ESCAPE_BYTES.contains(&value)
        }
        _ => false,
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

fn decode_chunk(chunk: &str) -> Cow<'_, str> {
    urlencoding::decode(chunk).unwrap_or(Cow::Borrowed(chunk))
}

/// Name shown for a document: its `name`, or the file name from its URL.
pub fn display_name(doc: &Document) -> String {
    match doc.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => document_file_name(doc),
    }
}

/// True when the document cannot link to a usable report: it is not
/// validated yet, its download failed or never happened, or its hash is empty.
pub fn report_link_unavailable(doc: &Document) -> bool {
    doc.validation_created.is_none()
        || doc.download_error.is_some()
        || doc.downloaded.is_none()
        || doc.hash.as_deref() == Some("")
}

/// True for a present, non-empty timestamp or marker.
pub(crate) fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
