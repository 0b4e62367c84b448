//! Tests for CSV export functionality.

use iati_validator::export::{construct_csv, export_csv, CSV_HEADER};
use serde_json::json;
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::validation_result;

/// Parses CSV text back into header + records with the `csv` crate.
fn parse(csv_text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let header = reader
        .headers()
        .expect("Failed to read header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| {
            r.expect("Failed to read record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}

fn detailed_result() -> iati_validator::ValidationResult {
    validation_result(json!({
        "registry_name": "org-activities",
        "document_url": "https://example.org/org-activities.xml",
        "valid": false,
        "report": {
            "valid": false,
            "summary": { "error": 2, "warning": 1 },
            "fileType": "iati-activities",
            "iatiVersion": "2.03",
            "errors": [
                {
                    "identifier": "file",
                    "errors": [{
                        "category": "schema",
                        "errors": [{
                            "id": "0.3.1",
                            "message": "The file is not valid against the schema, see \"details\"",
                            "severity": "critical",
                            "context": [{ "text": "line 4" }, { "text": "" }, {}]
                        }]
                    }]
                },
                {
                    "identifier": "XM-DAC-1-ACT",
                    "title": "Water, sanitation and hygiene",
                    "errors": [
                        {
                            "category": "financial",
                            "errors": [
                                {
                                    "id": "4.1.1",
                                    "message": "Budget period is longer than one year, check dates",
                                    "severity": "error",
                                    "context": [{ "text": "budget 1" }, { "text": "budget 2" }]
                                },
                                {
                                    "id": "4.2.1",
                                    "message": "Transaction date is in the future",
                                    "severity": "warning",
                                    "context": []
                                }
                            ]
                        },
                        {
                            "category": "made-up",
                            "errors": [{
                                "id": "9.9.9",
                                "message": "Multi\nline message",
                                "severity": "error",
                                "context": []
                            }]
                        }
                    ]
                }
            ]
        }
    }))
}

#[test]
fn test_valid_result_without_errors_has_one_summary_row() {
    let results = vec![validation_result(json!({
        "registry_name": "name",
        "document_url": "url",
        "valid": true,
        "report": { "valid": true }
    }))];

    let csv_text = construct_csv(&results).expect("Failed to build CSV");
    let (header, rows) = parse(&csv_text);

    assert_eq!(header, CSV_HEADER.to_vec());
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec!["name", "url", "Validated", "True", "", "", "", "", "", "", ""]
    );
}

#[test]
fn test_result_without_report_has_one_summary_row() {
    let results = vec![validation_result(json!({
        "registry_name": "name",
        "document_url": "url",
        "valid": false,
        "report": null
    }))];

    let (_, rows) = parse(&construct_csv(&results).expect("Failed to build CSV"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][2], "Validated");
    assert_eq!(rows[0][3], "False");
}

#[test]
fn test_one_row_per_error() {
    let (header, rows) = parse(&construct_csv(&[detailed_result()]).expect("Failed to build CSV"));
    assert_eq!(header.len(), 11);
    assert_eq!(rows.len(), 4);

    let file_row = &rows[0];
    assert_eq!(file_row[0], "org-activities");
    assert_eq!(file_row[2], "Validated");
    assert_eq!(file_row[3], "False");
    assert_eq!(file_row[4], "");
    assert_eq!(file_row[5], "file");
    assert_eq!(file_row[6], "Schema");
    assert_eq!(file_row[7], "critical");
    assert_eq!(file_row[8], "0.3.1");
    assert_eq!(file_row[10], "line 4 ");

    let budget_row = &rows[1];
    assert_eq!(budget_row[4], "Water, sanitation and hygiene");
    assert_eq!(budget_row[5], "XM-DAC-1-ACT");
    assert_eq!(budget_row[6], "Financial");
    assert_eq!(budget_row[10], "budget 1 budget 2 ");

    assert_eq!(rows[2][10], "");
    // Unknown categories have no label
    assert_eq!(rows[3][6], "");
}

#[test]
fn test_round_trip_preserves_special_characters() {
    let (_, rows) = parse(&construct_csv(&[detailed_result()]).expect("Failed to build CSV"));

    assert_eq!(
        rows[0][9],
        "The file is not valid against the schema, see \"details\""
    );
    assert_eq!(
        rows[1][9],
        "Budget period is longer than one year, check dates"
    );
    assert_eq!(rows[3][9], "Multi\nline message");
}

#[test]
fn test_multiple_results_keep_input_order() {
    let pending = validation_result(json!({
        "registry_name": "pending",
        "document_url": "https://example.org/pending.xml",
        "valid": null
    }));
    let results = vec![pending, detailed_result()];

    let (_, rows) = parse(&construct_csv(&results).expect("Failed to build CSV"));
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][0], "pending");
    assert_eq!(rows[0][2], "Pending Validation");
    assert_eq!(rows[0][3], "");
    assert!(rows[1..].iter().all(|r| r[0] == "org-activities"));
}

#[test]
fn test_export_csv_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("report.csv");

    let results = vec![detailed_result()];
    let rows = export_csv(&results, Some(&output)).expect("Failed to export CSV");
    assert_eq!(rows, 4);

    let written = std::fs::read_to_string(&output).expect("Failed to read CSV output");
    assert_eq!(
        written,
        construct_csv(&results).expect("Failed to build CSV")
    );
}

#[test]
fn test_export_csv_to_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("missing").join("report.csv");
    assert!(export_csv(&[], Some(&output)).is_err());
}
