//! JSON Export functionality
//!
//! Exports a household report (expenses, per-currency summaries and the
//! settlement plan for each currency) to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::error::{FamspendError, FamspendResult};
use crate::models::{ExpenseRecord, SettlementResult};
use crate::services::settlement::SettlementSolver;
use crate::services::summary::HouseholdSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Complete household report
#[derive(Debug, Clone, Serialize)]
pub struct HouseholdReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub household_name: String,

    /// All expenses the report was built from
    pub expenses: Vec<ExpenseRecord>,

    /// Spending summary per currency
    pub summary: HouseholdSummary,

    /// Settlement plan per currency, in summary order
    pub settlements: Vec<SettlementResult>,

    /// Export metadata
    pub metadata: ReportMetadata,
}

/// Report metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Number of distinct currencies
    pub currency_count: usize,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl HouseholdReport {
    /// Build a report from expense records
    ///
    /// Settlements use the configured tolerance and include every configured
    /// household member.
    pub fn build(records: &[ExpenseRecord], settings: &Settings) -> FamspendResult<Self> {
        let summary = HouseholdSummary::from_records(records, &settings.members)?;
        let solver = SettlementSolver::new(settings.settlement_tolerance);

        let settlements = summary
            .currencies
            .iter()
            .map(|s| solver.settle(&s.contributions(), s.currency.name()))
            .collect::<FamspendResult<Vec<_>>>()?;

        let metadata = ReportMetadata {
            expense_count: records.len(),
            currency_count: summary.currencies.len(),
            earliest_expense: records.iter().map(|r| r.date).min().map(|d| d.to_string()),
            latest_expense: records.iter().map(|r| r.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            household_name: settings.household_name.clone(),
            expenses: records.to_vec(),
            summary,
            settlements,
            metadata,
        })
    }
}

/// Export the household report to JSON
pub fn export_report_json<W: Write>(
    report: &HouseholdReport,
    writer: &mut W,
    pretty: bool,
) -> FamspendResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, report)
    } else {
        serde_json::to_writer(writer, report)
    }
    .map_err(|e| FamspendError::Export(e.to_string()))?;

    Ok(())
}
