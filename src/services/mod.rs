//! Service layer for famspend
//!
//! The three core operations (classifying text, parsing expense messages
//! and settling up) are pure functions over the models. The remaining
//! services build household reports on top of them.

pub mod budget;
pub mod classifier;
pub mod import;
pub mod parser;
pub mod settlement;
pub mod summary;

pub use budget::{load_budgets, BudgetService};
pub use classifier::classify;
pub use import::{ColumnMapping, ImportResult, ImportService};
pub use parser::{parse, ExpenseParser};
pub use settlement::{compute_settlements, SettlementSolver};
pub use summary::{CategoryTotal, CurrencySummary, HouseholdSummary, MemberTotal};
