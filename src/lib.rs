//! famspend - household expense tracking
//!
//! This library provides the core of a shared household expense tracker:
//! turning free-text messages such as "Spent 200 rs on taxi - late night
//! ride" into categorized expenses, and working out who should pay whom so
//! that every member ends up paying the same share.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, budgets, settlements)
//! - `services`: Classification, parsing, settlement and household reports
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `famspend` binary
//!
//! # Example
//!
//! ```rust
//! use famspend::models::{Category, ContributionEntry, Money};
//!
//! let expense = famspend::parse_expense("Groceries 450 rupees").unwrap();
//! assert_eq!(expense.category, Category::Groceries);
//!
//! let plan = famspend::compute_settlements(
//!     &[
//!         ContributionEntry::new("A", Money::from_units(300)),
//!         ContributionEntry::new("B", Money::from_units(100)),
//!     ],
//!     "rupees",
//! )
//! .unwrap();
//! assert_eq!(plan.transfers[0].to_string(), "B -> A: 100.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{FamspendError, FamspendResult};
pub use services::classifier::classify as classify_category;
pub use services::parser::parse as parse_expense;
pub use services::settlement::compute_settlements;
