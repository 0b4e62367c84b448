//! Validation status and severity rank.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use strum_macros::EnumIter as EnumIterMacro;

use super::is_set;
use crate::models::Document;

/// Display caption of a document's validation status.
///
/// Variants are declared in display priority order (most severe first), which
/// is also the order of the status sort options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum StatusCaption {
    Critical,
    Error,
    Warning,
    Success,
    NotApplicable,
}

impl StatusCaption {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCaption::Critical => "Critical",
            StatusCaption::Error => "Error",
            StatusCaption::Warning => "Warning",
            StatusCaption::Success => "Success",
            StatusCaption::NotApplicable => "N/A",
        }
    }

    /// CSS-class-friendly form of the caption.
    pub fn value(&self) -> &'static str {
        match self {
            StatusCaption::Critical => "critical",
            StatusCaption::Error => "error",
            StatusCaption::Warning => "warning",
            StatusCaption::Success => "success",
            StatusCaption::NotApplicable => "normal",
        }
    }

    /// Text colour class for the caption; N/A is rendered uncoloured.
    pub fn color_class(&self) -> Option<String> {
        match self {
            StatusCaption::NotApplicable => None,
            other => Some(format!("text-{}", other.as_str().to_lowercase())),
        }
    }
}

impl fmt::Display for StatusCaption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusCaption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Critical" => Ok(StatusCaption::Critical),
            "Error" => Ok(StatusCaption::Error),
            "Warning" => Ok(StatusCaption::Warning),
            "Success" => Ok(StatusCaption::Success),
            "N/A" => Ok(StatusCaption::NotApplicable),
            other => Err(format!("unknown validation status: {}", other)),
        }
    }
}

/// Validation status as rendered by the UI: a CSS value plus a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationStatus {
    pub value: &'static str,
    pub caption: StatusCaption,
}

impl From<StatusCaption> for ValidationStatus {
    fn from(caption: StatusCaption) -> Self {
        Self {
            value: caption.value(),
            caption,
        }
    }
}

/// Derives the validation status of a document from its report.
///
/// Decision table, first match wins:
/// 1. no report: N/A
/// 2. valid, zero errors and zero warnings: Success
/// 3. valid, zero errors: Warning
/// 4. valid: Error
/// 5. invalid: Critical
/// 6. otherwise (not evaluated): N/A
///
/// A missing summary or count never equals zero, so such reports can only
/// land on Error, Critical or N/A.
pub fn validation_status(doc: &Document) -> ValidationStatus {
    let Some(report) = doc.report.as_ref() else {
        return StatusCaption::NotApplicable.into();
    };
    let (errors, warnings) = report
        .summary
        .map(|s| (s.error, s.warning))
        .unwrap_or((None, None));

    let caption = match report.valid {
        Some(true) if errors == Some(0) && warnings == Some(0) => StatusCaption::Success,
        Some(true) if errors == Some(0) => StatusCaption::Warning,
        Some(true) => StatusCaption::Error,
        Some(false) => StatusCaption::Critical,
        None => StatusCaption::NotApplicable,
    };
    caption.into()
}

/// Ranks a document from 1 (Critical, worst) to 5 (Success, best).
///
/// Documents that have not been validated rank 2, like N/A.
pub fn severity_rank(doc: &Document) -> u8 {
    if !is_set(&doc.validation_created) {
        return 2;
    }
    match validation_status(doc).caption {
        StatusCaption::Critical => 1,
        StatusCaption::NotApplicable => 2,
        StatusCaption::Error => 3,
        StatusCaption::Warning => 4,
        StatusCaption::Success => 5,
    }
}

/// Orders two documents by [`severity_rank`], worst first.
pub fn compare_document_severity(a: &Document, b: &Document) -> Ordering {
    severity_rank(a).cmp(&severity_rank(b))
}
