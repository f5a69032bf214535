//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod report;
pub mod settle;

use std::path::Path;

pub use expense::{handle_classify_command, handle_parse_command, ClassifyArgs, ParseArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_budget_command, handle_summary_command, BudgetArgs, SummaryArgs};
pub use settle::{handle_settle_command, SettleArgs};

use crate::config::settings::Settings;
use crate::error::FamspendResult;
use crate::models::ExpenseRecord;
use crate::services::import::{ColumnMapping, ImportService};
use crate::services::parser::ExpenseParser;

/// Read an expense log (date, member, message columns)
///
/// Rows that cannot be read are reported on stderr and skipped.
pub fn load_expenses(path: &Path, settings: &Settings) -> FamspendResult<Vec<ExpenseRecord>> {
    let parser = ExpenseParser::new();
    let mapping = ColumnMapping::new().with_date_format(&settings.date_format);
    let result = ImportService::new(&parser, mapping).import_file(path)?;

    for (row, message) in &result.error_messages {
        log::warn!("Skipping row {} of {}: {}", row, path.display(), message);
        eprintln!("Skipped row {}: {}", row, message);
    }

    Ok(result.records)
}
