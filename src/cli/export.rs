//! CLI command for data export
//!
//! Exports an expense log as CSV, or a full household report as JSON or
//! YAML, to a file or stdout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{FamspendError, FamspendResult};
use crate::export::{export_expenses_csv, export_report_json, export_report_yaml, HouseholdReport};

use super::load_expenses;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full household report)
    Json,
    /// YAML format (full household report, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Expense log CSV (date, member, message)
    pub file: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> FamspendResult<()> {
    let records = load_expenses(&args.file, settings)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FamspendError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Csv => export_expenses_csv(&records, &settings.date_format, &mut writer)?,
        ExportFormat::Json => {
            let report = HouseholdReport::build(&records, settings)?;
            export_report_json(&report, &mut writer, args.pretty)?;
            writeln!(writer).map_err(|e| FamspendError::Export(e.to_string()))?;
        }
        ExportFormat::Yaml => {
            let report = HouseholdReport::build(&records, settings)?;
            export_report_yaml(&report, &mut writer)?;
        }
    }
    writer.flush().map_err(|e| FamspendError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        eprintln!("Exported {} expenses to {}", records.len(), path.display());
    }
    Ok(())
}
