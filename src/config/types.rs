//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for the `iati_validator` binary.
///
/// Every subcommand reads a JSON snapshot previously fetched from the
/// validation API. Pass `-` as the file to read from stdin.
#[derive(Debug, Parser)]
#[command(name = "iati_validator", version, about)]
pub struct Opt {
    /// Log level
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `iati_validator` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print validation, download and datastore status for a list of documents
    Status {
        /// JSON array of documents
        file: PathBuf,
    },
    /// Print document file names in the order chosen by a sort option
    Sort {
        /// JSON array of documents
        file: PathBuf,
        /// Sort option label, e.g. "File Name: A - Z" (defaults to the most severe status)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Print error categories and severities of a single report
    Summary {
        /// JSON report object
        file: PathBuf,
    },
    /// Export validation results as CSV
    Export {
        /// JSON array of validation results
        file: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
