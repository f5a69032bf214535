//! Household summary display formatting
//!
//! Renders per-currency member and category breakdowns.

use crate::services::summary::{CurrencySummary, HouseholdSummary};

use super::report::{format_bar, format_percentage, separator, truncate};

const WIDTH: usize = 60;

/// Format a household summary, one section per currency
pub fn format_household_summary(household_name: &str, summary: &HouseholdSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", household_name));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if summary.is_empty() {
        output.push_str("No expenses found.\n");
        return output;
    }

    for currency in &summary.currencies {
        output.push('\n');
        output.push_str(&format_currency_summary(currency));
    }
    output
}

/// Format the summary of a single currency
pub fn format_currency_summary(summary: &CurrencySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Spending in {} (total {}, fair share {})\n",
        summary.currency, summary.total, summary.fair_share
    ));

    output.push_str("\nBy member:\n");
    for member in &summary.members {
        output.push_str(&format!(
            "  {:16} {:>12} {:>6}  {:>3} expenses  balance {:>10}\n",
            truncate(&member.member, 16),
            member.total.to_string(),
            format_percentage(member.share_percent),
            member.expense_count,
            format!("{:+.2}", member.balance.amount()),
        ));
    }

    output.push_str("\nBy category:\n");
    let largest = summary
        .categories
        .first()
        .map(|c| c.total.amount())
        .unwrap_or_default();
    for category in &summary.categories {
        output.push_str(&format!(
            "  {:16} {:>12}  {}\n",
            truncate(category.category.name(), 16),
            category.total.to_string(),
            format_bar(category.total.amount(), largest, 20),
        ));
    }
    output
}
