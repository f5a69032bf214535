//! Settle-up CLI command
//!
//! Settlements can be computed from explicit `NAME=AMOUNT` contributions or
//! from an expense log, in which case every currency is settled separately.

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_settlement;
use crate::error::{FamspendError, FamspendResult};
use crate::models::{ContributionEntry, Currency, Money};
use crate::services::settlement::SettlementSolver;
use crate::services::summary::HouseholdSummary;

use super::load_expenses;

/// Arguments for `settle`
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Contributions as NAME=AMOUNT, e.g. Asha=300 Ravi=100
    #[arg(value_parser = parse_contribution)]
    pub contributions: Vec<ContributionEntry>,

    /// Expense log CSV (date, member, message) to total contributions from
    #[arg(short, long, conflicts_with = "contributions")]
    pub expenses: Option<PathBuf>,

    /// Household member to include even if they paid nothing (repeatable)
    #[arg(short, long = "member")]
    pub members: Vec<String>,

    /// Currency to settle (default: the configured currency, or every
    /// currency in the expense log)
    #[arg(short, long)]
    pub currency: Option<Currency>,
}

/// Handle the settle command
pub fn handle_settle_command(settings: &Settings, args: SettleArgs) -> FamspendResult<()> {
    let solver = SettlementSolver::new(settings.settlement_tolerance);

    let mut members = settings.members.clone();
    for member in &args.members {
        if !members.contains(member) {
            members.push(member.clone());
        }
    }

    match args.expenses {
        Some(path) => {
            let records = load_expenses(&path, settings)?;
            let summary = HouseholdSummary::from_records(&records, &members)?;

            let currencies: Vec<Currency> = match args.currency {
                Some(currency) => vec![currency],
                None => summary.currencies.iter().map(|s| s.currency).collect(),
            };
            if currencies.is_empty() {
                return Err(FamspendError::no_participants());
            }

            for (idx, currency) in currencies.iter().enumerate() {
                let contributions = match summary.for_currency(*currency) {
                    Some(s) => s.contributions(),
                    None => with_members(Vec::new(), &members),
                };
                let result = solver.settle(&contributions, currency.name())?;
                if idx > 0 {
                    println!();
                }
                print!("{}", format_settlement(&result));
            }
        }
        None => {
            let contributions = with_members(args.contributions, &members);
            let currency = args.currency.unwrap_or(settings.default_currency);
            let result = solver.settle(&contributions, currency.name())?;
            print!("{}", format_settlement(&result));
        }
    }

    Ok(())
}

/// Append a zero contribution for each member not already listed
fn with_members(
    mut contributions: Vec<ContributionEntry>,
    members: &[String],
) -> Vec<ContributionEntry> {
    for member in members {
        if !contributions.iter().any(|c| &c.participant_name == member) {
            contributions.push(ContributionEntry::new(member.clone(), Money::zero()));
        }
    }
    contributions
}

/// Parse a `NAME=AMOUNT` argument
fn parse_contribution(s: &str) -> Result<ContributionEntry, String> {
    let (name, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{}'", s))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", s));
    }
    let amount = Money::parse(amount).map_err(|e| e.to_string())?;

    Ok(ContributionEntry::new(name, amount))
}
