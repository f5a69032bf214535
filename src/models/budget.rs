//! Monthly budget models
//!
//! A budget caps spending in one category for one month. The status of a
//! budget compares it against what was actually spent in that month.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::currency::Currency;
use super::money::Money;
use super::period::Month;

/// Amount budgeted for a category in a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    pub category: Category,
    pub amount: Money,
    #[serde(default)]
    pub currency: Currency,
    pub month: Month,
}

impl MonthlyBudget {
    pub fn new(category: Category, amount: Money, currency: Currency, month: Month) -> Self {
        Self {
            category,
            amount,
            currency,
            month,
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), String> {
        if self.amount.is_negative() {
            return Err(format!(
                "Budget for {} in {} cannot be negative",
                self.category, self.month
            ));
        }
        Ok(())
    }
}

/// Budget against spending for one category in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub category: Category,
    /// Budgeted amount, zero when the category has no budget
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub over_budget: bool,
    pub month: Month,
    pub currency: Currency,
}

impl BudgetStatus {
    /// Build a status from a budget amount and the spending against it
    pub fn new(
        category: Category,
        budget: Money,
        spent: Money,
        month: Month,
        currency: Currency,
    ) -> Self {
        let remaining = budget - spent;
        Self {
            category,
            budget,
            spent,
            remaining,
            over_budget: remaining.is_negative(),
            month,
            currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_over_budget() {
        let month = Month::new(2025, 1).unwrap();
        let status = BudgetStatus::new(
            Category::Dining,
            Money::from_units(1000),
            Money::from_units(1250),
            month,
            Currency::Rupees,
        );
        assert_eq!(status.remaining, Money::from_units(-250));
        assert!(status.over_budget);
    }

    #[test]
    fn test_status_without_budget() {
        let month = Month::new(2025, 1).unwrap();
        let status = BudgetStatus::new(
            Category::Groceries,
            Money::zero(),
            Money::from_units(300),
            month,
            Currency::Rupees,
        );
        assert_eq!(status.remaining, Money::from_units(-300));
        assert!(status.over_budget);
    }

    #[test]
    fn test_negative_budget_invalid() {
        let month = Month::new(2025, 1).unwrap();
        let budget = MonthlyBudget::new(
            Category::Utilities,
            Money::from_units(-5),
            Currency::Rupees,
            month,
        );
        assert!(budget.validate().is_err());
    }

    #[test]
    fn test_deserialize_budget() {
        let json = r#"{"category":"Groceries","amount":5000,"month":"2025-01"}"#;
        let budget: MonthlyBudget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.category, Category::Groceries);
        assert_eq!(budget.amount, Money::from_units(5000));
        assert_eq!(budget.currency, Currency::Rupees);
    }
}
