//! Budget service
//!
//! Loads monthly budgets and compares them against recorded spending.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{FamspendError, FamspendResult};
use crate::models::{
    BudgetStatus, Category, Currency, ExpenseRecord, Money, Month, MonthlyBudget,
};

/// Service for monthly budget status
pub struct BudgetService<'a> {
    budgets: &'a [MonthlyBudget],
    default_currency: Currency,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    ///
    /// `default_currency` is used for categories that have spending but no
    /// budget.
    pub fn new(budgets: &'a [MonthlyBudget], default_currency: Currency) -> Self {
        Self {
            budgets,
            default_currency,
        }
    }

    /// Find the budget for a category in a month
    pub fn find_budget(&self, category: &Category, month: Month) -> Option<&'a MonthlyBudget> {
        self.budgets
            .iter()
            .find(|b| &b.category == category && b.month == month)
    }

    /// Budget status for a single category
    ///
    /// Only records in the budget's currency count as spending against it.
    ///
    /// # Errors
    ///
    /// Fails if the amount spent does not fit in a `Decimal`.
    pub fn status(
        &self,
        category: &Category,
        month: Month,
        records: &[ExpenseRecord],
    ) -> FamspendResult<BudgetStatus> {
        let (budget, currency) = match self.find_budget(category, month) {
            Some(b) => (b.amount, b.currency),
            None => (Money::zero(), self.default_currency),
        };

        let spent = records
            .iter()
            .filter(|r| &r.category == category && r.currency == currency)
            .filter(|r| month.contains(r.date))
            .map(|r| r.amount);
        let spent = Money::checked_sum(spent).ok_or_else(|| {
            FamspendError::amount_overflow(format!("{} spending in {}", category, month))
        })?;

        Ok(BudgetStatus::new(category.clone(), budget, spent, month, currency))
    }

    /// Budget status for every relevant category in a month
    ///
    /// Covers budgeted categories, categories with spending in the month and
    /// the default budgeted categories, sorted by name.
    pub fn monthly_report(
        &self,
        month: Month,
        records: &[ExpenseRecord],
    ) -> FamspendResult<Vec<BudgetStatus>> {
        let mut categories: Vec<Category> = Vec::new();
        let mut seen = HashSet::new();

        let budgeted = self
            .budgets
            .iter()
            .filter(|b| b.month == month)
            .map(|b| &b.category);
        let spent = records
            .iter()
            .filter(|r| month.contains(r.date))
            .map(|r| &r.category);

        let defaults = Category::DEFAULT_BUDGETED;

        for category in budgeted.chain(spent).chain(defaults.iter()) {
            if seen.insert(category.clone()) {
                categories.push(category.clone());
            }
        }
        categories.sort_by(|a, b| a.name().cmp(b.name()));

        categories
            .iter()
            .map(|c| self.status(c, month, records))
            .collect()
    }
}

/// Load budgets from a JSON array
///
/// # Errors
///
/// Fails if the file is missing or cannot be parsed, if a budget is negative, or
/// if a category is budgeted twice for the same month.
pub fn load_budgets(path: &Path) -> FamspendResult<Vec<MonthlyBudget>> {
    if !path.exists() {
        return Err(FamspendError::NotFound {
            entity_type: "Budgets file",
            identifier: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        FamspendError::Io(format!("Failed to read budgets file {}: {}", path.display(), e))
    })?;
    let budgets: Vec<MonthlyBudget> = serde_json::from_str(&contents)?;

    let mut seen = HashSet::new();
    for budget in &budgets {
        budget.validate().map_err(FamspendError::Validation)?;
        if !seen.insert((budget.category.clone(), budget.month)) {
            return Err(FamspendError::Duplicate {
                entity_type: "Budget",
                identifier: format!("{} {}", budget.category, budget.month),
            });
        }
    }

    log::debug!("Loaded {} budgets from {}", budgets.len(), path.display());
    Ok(budgets)
}
