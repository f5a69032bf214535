//! Expense display formatting
//!
//! Formats parsed expenses and expense records for terminal output.

use crate::models::{ExpenseRecord, ParsedExpense};

use super::report::truncate;

/// Format a parsed expense as a detail view
pub fn format_parsed_expense(expense: &ParsedExpense) -> String {
    let mut output = String::new();
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Amount:      {} {}\n", expense.amount, expense.currency));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output.push_str(&format!("Read from:   \"{}\"\n", expense.original_category_text));
    output
}

/// Format a list of expense records as a register
pub fn format_expense_list(records: &[ExpenseRecord]) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:12} {:16} {:>12} {:8} {}\n",
        "Date", "Person", "Category", "Amount", "Currency", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for record in records {
        output.push_str(&format!(
            "{:10} {:12} {:16} {:>12} {:8} {}\n",
            record.date.format("%Y-%m-%d"),
            truncate(&record.member, 12),
            truncate(record.category.name(), 16),
            record.amount.to_string(),
            record.currency.name(),
            record.description
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Currency, Money};

    #[test]
    fn test_format_parsed_expense() {
        let expense = ParsedExpense {
            category: Category::Transportation,
            amount: Money::from_units(200),
            currency: Currency::Rupees,
            description: "late night ride".into(),
            original_category_text: "on taxi".into(),
        };

        let output = format_parsed_expense(&expense);
        assert!(output.contains("Category:    Transportation"));
        assert!(output.contains("Amount:      200.00 rupees"));
        assert!(output.contains("Description: late night ride"));
        assert!(output.contains("\"on taxi\""));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_expense_list(&[]), "No expenses found.\n");
    }
}
