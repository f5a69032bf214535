//! Free-text expense parsing
//!
//! Turns a message such as "Spent 200 rs on taxi - late night ride" into a
//! [`ParsedExpense`]. The message is tried against an ordered cascade of
//! patterns; the first one that matches decides the amount, the currency
//! and the phrase that gets classified as the category. Anything after the
//! first hyphen in the message becomes the description, whichever pattern
//! matched. The whole-phrase patterns only look at the text before that
//! hyphen, so a description never ends up read as the category.

pub mod patterns;

use std::sync::LazyLock;

use crate::error::{FamspendError, FamspendResult};
use crate::models::ParsedExpense;
use crate::services::classifier;

pub use patterns::{standard_patterns, ExpensePattern, PatternMatch};

/// Parses expense messages with an ordered list of patterns
pub struct ExpenseParser {
    patterns: Vec<Box<dyn ExpensePattern>>,
}

impl Default for ExpenseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseParser {
    /// Create a parser with the standard pattern cascade
    pub fn new() -> Self {
        Self::with_patterns(standard_patterns())
    }

    /// Create a parser that tries `patterns` in the given order
    pub fn with_patterns(patterns: Vec<Box<dyn ExpensePattern>>) -> Self {
        Self { patterns }
    }

    /// Parse a single message
    ///
    /// # Errors
    ///
    /// Returns [`FamspendError::Parse`] when no pattern can find an amount in
    /// the message. This is a recoverable condition; callers should ask for
    /// the expense again.
    pub fn parse(&self, message: &str) -> FamspendResult<ParsedExpense> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(FamspendError::unparseable(message));
        }

        let Some((pattern, found)) = self
            .patterns
            .iter()
            .find_map(|p| p.attempt(trimmed).map(|m| (p.name(), m)))
        else {
            log::warn!("Could not parse expense from: {}", message);
            return Err(FamspendError::unparseable(message));
        };

        let expense = ParsedExpense {
            category: classifier::classify(&found.category_text),
            amount: found.amount,
            currency: found.currency,
            description: extract_description(message),
            original_category_text: found.category_text,
        };

        log::debug!("Parsed expense with '{}' pattern: {:?}", pattern, expense);
        Ok(expense)
    }
}

/// Everything after the first hyphen, trimmed
fn extract_description(message: &str) -> String {
    message
        .split_once('-')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}

static DEFAULT_PARSER: LazyLock<ExpenseParser> = LazyLock::new(ExpenseParser::new);

/// Parse a message with the standard pattern cascade
pub fn parse(message: &str) -> FamspendResult<ParsedExpense> {
    DEFAULT_PARSER.parse(message)
}
