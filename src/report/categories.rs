//! Error categories and their per-report counts.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::models::Report;

/// Fixed taxonomy of the parts of an IATI file an error can concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Category {
    Schema,
    Information,
    Financial,
    Identifiers,
    Organisation,
    Participating,
    Geo,
    Classifications,
    Documents,
    Performance,
    Iati,
    Relations,
}

impl Category {
    /// Looks up a category by its wire id; unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "schema" => Some(Category::Schema),
            "information" => Some(Category::Information),
            "financial" => Some(Category::Financial),
            "identifiers" => Some(Category::Identifiers),
            "organisation" => Some(Category::Organisation),
            "participating" => Some(Category::Participating),
            "geo" => Some(Category::Geo),
            "classifications" => Some(Category::Classifications),
            "documents" => Some(Category::Documents),
            "performance" => Some(Category::Performance),
            "iati" => Some(Category::Iati),
            "relations" => Some(Category::Relations),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Category::Schema => "schema",
            Category::Information => "information",
            Category::Financial => "financial",
            Category::Identifiers => "identifiers",
            Category::Organisation => "organisation",
            Category::Participating => "participating",
            Category::Geo => "geo",
            Category::Classifications => "classifications",
            Category::Documents => "documents",
            Category::Performance => "performance",
            Category::Iati => "iati",
            Category::Relations => "relations",
        }
    }

    /// Human-readable label shown in reports and the CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Schema => "Schema",
            Category::Information => "Basic activity information",
            Category::Financial => "Financial",
            Category::Identifiers => "Identification",
            Category::Organisation => "Basic organisation information",
            Category::Participating => "Participating organisations",
            Category::Geo => "Geopolitical information",
            Category::Classifications => "Classifications",
            Category::Documents => "Related documents",
            Category::Performance => "Performance",
            Category::Iati => "IATI file",
            Category::Relations => "Relations",
        }
    }
}

/// Label for a category id, `None` for ids outside the taxonomy.
pub fn category_label(id: &str) -> Option<&'static str> {
    Category::from_id(id).map(|c| c.label())
}

/// A category present in a report, with its error count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCategory {
    pub id: String,
    pub name: Option<&'static str>,
    pub count: usize,
    /// UI filter toggle, always initialised to `true`.
    pub show: bool,
}

/// Lists the categories present in a report in first-seen order.
///
/// Each entry counts the errors filed under that category across every error
/// group of the report.
pub fn report_categories(report: &Report) -> Vec<ReportCategory> {
    let mut categories: Vec<ReportCategory> = Vec::new();

    for cat_group in report.errors.iter().flat_map(|group| &group.errors) {
        match categories.iter_mut().find(|c| c.id == cat_group.category) {
            Some(existing) => existing.count += cat_group.errors.len(),
            None => categories.push(ReportCategory {
                id: cat_group.category.clone(),
                name: category_label(&cat_group.category),
                count: cat_group.errors.len(),
                show: true,
            }),
        }
    }

    log::debug!("Report has {} error categories", categories.len());
    categories
}
