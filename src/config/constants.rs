//! Configuration constants.
//!
//! Fixed lookup tables used by the derivation functions. These mirror the
//! business rules of the validation service and are not user-configurable.

// Report file types
pub const FILE_TYPE_ACTIVITIES: &str = "iati-activities";
pub const FILE_TYPE_ORGANISATIONS: &str = "iati-organisations";

/// IATI version string the validator reports for unsupported 1.x files.
pub const LEGACY_IATI_VERSION: &str = "1*";

/// Error ids raised for version problems that the cleaning pipeline can still
/// recover from, so such files will eventually reach the datastore.
pub const RECOVERABLE_VERSION_ERROR_IDS: &[&str] = &["0.6.1", "0.2.1", "0.1.1"];

/// `clean_error` value recorded when cleaning found nothing to index.
pub const CLEAN_ERROR_NO_VALID_ACTIVITIES: &str = "No valid activities";

// Download error codes recorded by the refresher
pub const DOWNLOAD_ERROR_CONNECTION: &str = "0";
pub const DOWNLOAD_ERROR_SSL: &str = "1";
pub const DOWNLOAD_ERROR_ENCODING: &str = "2";
pub const DOWNLOAD_ERROR_INVALID_URL: &str = "3";

/// HTTP status codes reported as a failed download.
pub const DOWNLOAD_HTTP_ERROR_CODES: &[&str] = &[
    "400", "401", "403", "404", "500", "501", "502", "503", "504", "505", "506", "507", "509",
    "510",
];

/// Output format for datastore timestamps (`05 Mar 2024 10:30`).
pub const DATE_DISPLAY_FORMAT: &str = "%d %b %Y %H:%M";

/// Prefix of the sort option labels generated per validation status.
pub const VALIDATION_STATUS_LABEL_PREFIX: &str = "Validation Status: ";
