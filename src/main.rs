//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iati_validator` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Loading JSON snapshots and printing derived values
//!
//! All derivation logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use iati_validator::config::{Command, Opt};
use iati_validator::document::{
    datastore_availability, display_name, download_status, validation_status,
};
use iati_validator::initialization::init_logger_with;
use iati_validator::models::{Document, Report, ValidationResult};
use iati_validator::report::{report_categories, report_severities};
use iati_validator::snapshot::load_snapshot;
use iati_validator::sort::{
    default_sorting_criteria, find_sort_option, sort_documents, sort_options,
};
use iati_validator::export_csv;

fn main() {
    let opt = Opt::parse();

    if let Err(e) = init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")
    {
        eprintln!("iati_validator error: {:#}", e);
        process::exit(1);
    }

    if let Err(e) = run(opt.command) {
        eprintln!("iati_validator error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Status { file } => {
            let documents: Vec<Document> = load_snapshot(&file)?;
            for doc in &documents {
                println!(
                    "{}\t{}\t{}\t{}",
                    display_name(doc),
                    validation_status(doc).caption,
                    download_status(doc).unwrap_or_default(),
                    datastore_availability(doc)
                );
            }
        }
        Command::Sort { file, sort } => {
            let documents: Vec<Document> = load_snapshot(&file)?;
            let options = sort_options(&documents);
            let label = sort.or_else(|| default_sorting_criteria(&documents));
            let Some(label) = label else {
                log::info!("No documents to sort");
                return Ok(());
            };
            let option = find_sort_option(&label, &options).with_context(|| {
                let available: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
                format!(
                    "Unknown sort option '{}' (available: {})",
                    label,
                    available.join(", ")
                )
            })?;
            log::info!("Sorting by '{}'", option.label);
            for doc in sort_documents(&documents, option.criteria).unwrap_or_default() {
                println!("{}", display_name(&doc));
            }
        }
        Command::Summary { file } => {
            let report: Report = load_snapshot(&file)?;
            let summary = serde_json::json!({
                "categories": report_categories(&report),
                "severities": report_severities(&report),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
            );
        }
        Command::Export { file, output } => {
            let results: Vec<ValidationResult> = load_snapshot(&file)?;
            let rows =
                export_csv(&results, output.as_deref()).context("Failed to export CSV")?;
            if let Some(path) = output {
                eprintln!("Exported {} rows to {}", rows, path.display());
            }
        }
    }
    Ok(())
}
