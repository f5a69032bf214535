//! Core data models for famspend
//!
//! This module contains the data structures of the household expense
//! domain: money and currencies, categories, parsed and recorded expenses,
//! monthly budgets, and settlement plans.

pub mod budget;
pub mod category;
pub mod currency;
pub mod expense;
pub mod money;
pub mod period;
pub mod settlement;

pub use budget::{BudgetStatus, MonthlyBudget};
pub use category::Category;
pub use currency::Currency;
pub use expense::{ExpenseRecord, ParsedExpense};
pub use money::{Money, MoneyParseError};
pub use period::{Month, MonthParseError};
pub use settlement::{ContributionEntry, SettlementResult, Transfer};
