//! Report CLI commands
//!
//! Household spending summary and monthly budget status, both built from an
//! expense log.

use std::path::PathBuf;

use clap::Args;

use crate::config::paths::FamspendPaths;
use crate::config::settings::Settings;
use crate::display::{format_budget_report, format_household_summary};
use crate::error::FamspendResult;
use crate::models::Month;
use crate::services::budget::{load_budgets, BudgetService};
use crate::services::summary::HouseholdSummary;

use super::load_expenses;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Expense log CSV (date, member, message)
    pub file: PathBuf,
}

/// Arguments for `budget`
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Expense log CSV (date, member, message)
    pub file: PathBuf,

    /// Budgets JSON file (default: budgets.json in the config directory)
    #[arg(short, long)]
    pub budgets: Option<PathBuf>,

    /// Budget month as YYYY-MM (default: current month)
    #[arg(short, long)]
    pub month: Option<Month>,
}

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> FamspendResult<()> {
    let records = load_expenses(&args.file, settings)?;
    let summary = HouseholdSummary::from_records(&records, &settings.members)?;
    print!("{}", format_household_summary(&settings.household_name, &summary));
    Ok(())
}

/// Handle the budget command
pub fn handle_budget_command(
    paths: &FamspendPaths,
    settings: &Settings,
    args: BudgetArgs,
) -> FamspendResult<()> {
    let budgets_path = args.budgets.unwrap_or_else(|| paths.budgets_file());
    let budgets = load_budgets(&budgets_path)?;
    let records = load_expenses(&args.file, settings)?;
    let month = args.month.unwrap_or_else(Month::current);

    let service = BudgetService::new(&budgets, settings.default_currency);
    let statuses = service.monthly_report(month, &records)?;
    print!("{}", format_budget_report(&statuses));
    Ok(())
}
