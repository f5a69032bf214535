//! Expense models
//!
//! `ParsedExpense` is what the text parser extracts from one message.
//! `ExpenseRecord` is a finalized expense: who paid, when, and the parsed
//! details. Records are what summaries, budgets and exports work from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::currency::Currency;
use super::money::Money;

/// Structured expense extracted from a free-text message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpense {
    /// Classified category
    pub category: Category,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Currency the amount was given in
    pub currency: Currency,

    /// Text after the first hyphen in the message, trimmed
    #[serde(default)]
    pub description: String,

    /// The raw phrase the parser read as the category, before classification
    #[serde(default)]
    pub original_category_text: String,
}

/// A finalized expense logged by a household member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Date the expense was logged for
    pub date: NaiveDate,

    /// Household member who paid
    pub member: String,

    pub category: Category,
    pub amount: Money,
    pub currency: Currency,

    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Finalize a parsed expense for a member on a date
    pub fn from_parsed(parsed: ParsedExpense, member: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            date,
            member: member.into(),
            category: parsed.category,
            amount: parsed.amount,
            currency: parsed.currency,
            description: parsed.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parsed() {
        let parsed = ParsedExpense {
            category: Category::Transportation,
            amount: Money::from_units(200),
            currency: Currency::Rupees,
            description: "late night ride".into(),
            original_category_text: "on taxi".into(),
        };
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let record = ExpenseRecord::from_parsed(parsed, "Ravi", date);
        assert_eq!(record.member, "Ravi");
        assert_eq!(record.category, Category::Transportation);
        assert_eq!(record.amount, Money::from_units(200));
        assert_eq!(record.description, "late night ride");
        assert_eq!(record.date, date);
    }
}
