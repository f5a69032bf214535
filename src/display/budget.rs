//! Budget status display formatting
//!
//! Renders a monthly budget report as a table.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::models::{BudgetStatus, Money};

/// Row of the budget status table
#[derive(Debug, Clone, Tabled)]
pub struct BudgetRow {
    #[tabled(rename = "Category")]
    pub category: String,

    #[tabled(rename = "Budget")]
    pub budget: String,

    #[tabled(rename = "Spent")]
    pub spent: String,

    #[tabled(rename = "Remaining")]
    pub remaining: String,

    #[tabled(rename = "Currency")]
    pub currency: String,

    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&BudgetStatus> for BudgetRow {
    fn from(status: &BudgetStatus) -> Self {
        let label = if status.over_budget {
            "OVER"
        } else if status.budget.is_zero() {
            "-"
        } else {
            "ok"
        };

        Self {
            category: status.category.name().to_string(),
            budget: status.budget.to_string(),
            spent: status.spent.to_string(),
            remaining: status.remaining.to_string(),
            currency: status.currency.name().to_string(),
            status: label.to_string(),
        }
    }
}

/// Format a monthly budget report as a table
pub fn format_budget_report(statuses: &[BudgetStatus]) -> String {
    let Some(first) = statuses.first() else {
        return "No budgets or spending found.\n".to_string();
    };

    let rows: Vec<BudgetRow> = statuses.iter().map(BudgetRow::from).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string();

    let over: Vec<&str> = statuses
        .iter()
        .filter(|s| s.over_budget)
        .map(|s| s.category.name())
        .collect();
    let total_spent = Money::checked_sum(
        statuses
            .iter()
            .filter(|s| s.currency == first.currency)
            .map(|s| s.spent),
    );

    let mut output = format!("Budget status for {}\n{}\n", first.month, table);
    if let Some(total_spent) = total_spent {
        output.push_str(&format!("Spent in {}: {}\n", first.currency, total_spent));
    }
    if !over.is_empty() {
        output.push_str(&format!("Over budget: {}\n", over.join(", ")));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Currency, Month};

    fn status(category: Category, budget: i64, spent: i64) -> BudgetStatus {
        BudgetStatus::new(
            category,
            Money::from_units(budget),
            Money::from_units(spent),
            Month::new(2025, 1).unwrap(),
            Currency::Rupees,
        )
    }

    #[test]
    fn test_budget_row_status() {
        assert_eq!(BudgetRow::from(&status(Category::Dining, 100, 150)).status, "OVER");
        assert_eq!(BudgetRow::from(&status(Category::Dining, 100, 50)).status, "ok");
        assert_eq!(BudgetRow::from(&status(Category::Dining, 0, 0)).status, "-");
    }

    #[test]
    fn test_format_budget_report() {
        let statuses = vec![
            status(Category::Dining, 1000, 1250),
            status(Category::Groceries, 5000, 3200),
        ];

        let output = format_budget_report(&statuses);
        assert!(output.starts_with("Budget status for 2025-01"));
        assert!(output.contains("Remaining"));
        assert!(output.contains("-250.00"));
        assert!(output.contains("Spent in rupees: 4450.00"));
        assert!(output.contains("Over budget: Dining"));
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(format_budget_report(&[]), "No budgets or spending found.\n");
    }
}
