//! Display formatting for terminal output
//!
//! Provides utilities for formatting parsed expenses, settlement plans and
//! household reports for the terminal.

pub mod budget;
pub mod expense;
pub mod report;
pub mod settlement;
pub mod summary;

pub use budget::format_budget_report;
pub use expense::{format_expense_list, format_parsed_expense};
pub use settlement::format_settlement;
pub use summary::{format_currency_summary, format_household_summary};
