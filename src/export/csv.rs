//! CSV export functionality.
//!
//! Flattens validation results into one row per reported error, with the
//! result-level columns repeated on every row.

use csv::{Terminator, Writer, WriterBuilder};
use std::io::{self, Write};
use std::path::Path;

use crate::error_handling::ExportError;
use crate::models::{ErrorItem, ValidationResult};
use crate::report::category_label;

/// Column headers of the CSV export, in order.
pub const CSV_HEADER: [&str; 11] = [
    "Registry file name",
    "URL",
    "Validation Status",
    "File Valid",
    "Activity Title",
    "Activity Identifier",
    "Category",
    "Severity",
    "ID",
    "Message",
    "Location where rule was broken",
];

/// Builds the CSV text for a set of validation results.
///
/// Each result contributes one row per (activity, category, error). A result
/// without a report, or whose report has no error groups, contributes a single
/// summary row with the error columns left empty.
///
/// # Errors
///
/// Returns `ExportError` if a record cannot be serialized.
pub fn construct_csv(results: &[ValidationResult]) -> Result<String, ExportError> {
    let mut writer = csv_writer(Vec::new());
    write_results(&mut writer, results)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::IoError(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the CSV for `results` to `output`, or to stdout when `output` is `None`.
///
/// # Returns
///
/// The number of data rows written (the header is not counted).
///
/// # Errors
///
/// Returns `ExportError` if the output file cannot be created or written.
pub fn export_csv(results: &[ValidationResult], output: Option<&Path>) -> Result<usize, ExportError> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut writer = csv_writer(sink);
    let rows = write_results(&mut writer, results)?;
    writer.flush()?;

    log::info!(
        "Exported {} rows for {} validation results",
        rows,
        results.len()
    );
    Ok(rows)
}

fn csv_writer<W: Write>(sink: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink)
}

fn write_results<W: Write>(
    writer: &mut Writer<W>,
    results: &[ValidationResult],
) -> Result<usize, ExportError> {
    writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for result in results {
        let registry_name = result.registry_name.as_deref().unwrap_or_default();
        let document_url = result.document_url.as_deref().unwrap_or_default();
        let (validation_status, file_valid) = match result.valid {
            Some(true) => ("Validated", "True"),
            Some(false) => ("Validated", "False"),
            None => ("Pending Validation", ""),
        };
        let prefix = [registry_name, document_url, validation_status, file_valid];

        let groups = result
            .report
            .as_ref()
            .map(|report| report.errors.as_slice())
            .unwrap_or_default();
        if groups.is_empty() {
            writer.write_record(prefix.iter().copied().chain([""; 7]))?;
            rows += 1;
            continue;
        }

        for group in groups {
            let title = group.title.as_deref().unwrap_or_default();
            for cat_group in &group.errors {
                let category = category_label(&cat_group.category).unwrap_or_default();
                for item in &cat_group.errors {
                    let location = location_text(item);
                    writer.write_record(prefix.iter().copied().chain([
                        title,
                        group.identifier.as_str(),
                        category,
                        item.severity.as_str(),
                        item.id.as_str(),
                        item.message.as_str(),
                        location.as_str(),
                    ]))?;
                    rows += 1;
                }
            }
        }
    }
    Ok(rows)
}

/// Joins the non-empty context texts of an error, each followed by a space.
fn location_text(item: &ErrorItem) -> String {
    item.context
        .iter()
        .filter_map(|ctx| ctx.text.as_deref())
        .filter(|text| !text.is_empty())
        .fold(String::new(), |mut acc, text| {
            acc.push_str(text);
            acc.push(' ');
            acc
        })
}
