//! Loading JSON snapshots fetched from the validation API.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error_handling::SnapshotError;

/// Reads and parses a JSON snapshot from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `SnapshotError::ReadError` if the input cannot be read and
/// `SnapshotError::ParseError` if it does not match the expected shape.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let display = path.display().to_string();
    let contents = if path.as_os_str() == "-" {
        log::info!("Reading snapshot from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| SnapshotError::ReadError {
                path: display.clone(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| SnapshotError::ReadError {
            path: display.clone(),
            source,
        })?
    };
    parse_snapshot(&contents, &display)
}

/// Parses a JSON snapshot already held in memory; `origin` names it in errors.
pub fn parse_snapshot<T: DeserializeOwned>(contents: &str, origin: &str) -> Result<T, SnapshotError> {
    serde_json::from_str(contents).map_err(|source| SnapshotError::ParseError {
        path: origin.to_string(),
        source,
    })
}
