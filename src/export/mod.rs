//! Export module for famspend
//!
//! Provides data export in multiple formats:
//! - CSV: expense records (spreadsheet-compatible)
//! - JSON: machine-readable household report
//! - YAML: human-readable household report

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, EXPENSE_CSV_HEADER};
pub use json::{export_report_json, HouseholdReport, ReportMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
