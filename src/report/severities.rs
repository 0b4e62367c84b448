//! Severity tiers and the message types grouped under them.

use std::collections::HashMap;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::models::{ErrorItem, Report};

/// The five fixed severity tiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SeverityLevel {
    Critical,
    Error,
    Warning,
    Improvement,
    Notification,
}

impl SeverityLevel {
    /// Looks up a tier by the `severity` value of an error item.
    pub fn from_id(id: &str) -> Option<Self> {
        SeverityLevel::iter().find(|level| level.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => "critical",
            SeverityLevel::Error => "error",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Improvement => "improvement",
            SeverityLevel::Notification => "notification",
        }
    }

    /// Styling slug used by the UI.
    pub fn slug(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => "critical",
            SeverityLevel::Error => "error",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Improvement => "info",
            SeverityLevel::Notification => "success",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => "Critical",
            SeverityLevel::Error => "Errors",
            SeverityLevel::Warning => "Warnings",
            SeverityLevel::Improvement => "Improvements",
            SeverityLevel::Notification => "Notifications",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => {
                "Files with critical errors will not be processed by the datastore"
            }
            SeverityLevel::Error => "Errors make it hard or impossible to use the data.",
            SeverityLevel::Warning => "Warnings indicate where the data can be more valuable.",
            SeverityLevel::Improvement => "Improvements can make the data more useful.",
            SeverityLevel::Notification => "Notifications are for your information.",
        }
    }

    pub fn order(&self) -> u8 {
        match self {
            SeverityLevel::Critical => 1,
            SeverityLevel::Error => 2,
            SeverityLevel::Warning => 3,
            SeverityLevel::Improvement => 4,
            SeverityLevel::Notification => 5,
        }
    }
}

/// A distinct error id observed in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageType {
    pub id: String,
    pub text: String,
    pub show: bool,
    /// Occurrences of this id anywhere in the report.
    pub count: usize,
}

/// Display record for one severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Severity {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub count: Option<usize>,
    pub order: u8,
    pub show: bool,
    pub types: Vec<MessageType>,
}

impl From<SeverityLevel> for Severity {
    fn from(level: SeverityLevel) -> Self {
        Self {
            id: level.id(),
            slug: level.slug(),
            name: level.name(),
            description: level.description(),
            count: None,
            order: level.order(),
            show: true,
            types: Vec::new(),
        }
    }
}

/// Returns the five severity records, in fixed order, with no message types.
pub fn severities() -> Vec<Severity> {
    SeverityLevel::iter().map(Severity::from).collect()
}

/// Groups the message types of a report under their severities.
///
/// Each distinct error id is listed once, under the severity of its first
/// occurrence, with the number of times the id occurs in the report. Types are
/// sorted by count, most frequent first (ties keep first-seen order). Only
/// severities with at least one type are returned, in fixed order. Ids whose
/// severity is not one of the five tiers are skipped.
pub fn report_severities(report: &Report) -> Vec<Severity> {
    let items = report
        .errors
        .iter()
        .flat_map(|group| &group.errors)
        .flat_map(|cat_group| &cat_group.errors);

    // First occurrence of each id, in encounter order, plus its total count
    let mut first_seen: Vec<&ErrorItem> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        let count = counts.entry(item.id.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(item);
        }
        *count += 1;
    }

    let mut result = severities();
    for item in first_seen {
        let Some(level) = SeverityLevel::from_id(&item.severity) else {
            log::warn!(
                "Skipping message type {} with unknown severity '{}'",
                item.id,
                item.severity
            );
            continue;
        };
        result[level as usize].types.push(MessageType {
            id: item.id.clone(),
            text: item.message.clone(),
            show: true,
            count: counts.get(item.id.as_str()).copied().unwrap_or_default(),
        });
    }

    for severity in &mut result {
        severity.types.sort_by(|a, b| b.count.cmp(&a.count));
    }
    result.retain(|severity| !severity.types.is_empty());
    result
}
