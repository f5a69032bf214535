//! Currency model
//!
//! The household tracks which currency an expense was logged in but never
//! converts between them. Amounts in different currencies are kept apart by
//! every report that sums them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the currencies an expense can be recorded in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Rupees,
    Dollars,
    Euros,
    Pounds,
    Yen,
}

/// Standardization order and the fragments that identify each currency.
/// A token is assigned to the first currency with a matching fragment.
const CURRENCY_FRAGMENTS: [(Currency, &[&str]); 5] = [
    (Currency::Rupees, &["rupee", "inr", "₹"]),
    (Currency::Dollars, &["dollar", "usd", "$"]),
    (Currency::Euros, &["euro", "eur", "€"]),
    (Currency::Pounds, &["pound", "gbp", "£"]),
    (Currency::Yen, &["yen", "jpy", "¥"]),
];

impl Currency {
    /// All currencies in standardization order
    pub fn all() -> &'static [Self] {
        &[
            Self::Rupees,
            Self::Dollars,
            Self::Euros,
            Self::Pounds,
            Self::Yen,
        ]
    }

    /// Lowercase plural name used on reports ("rupees", "dollars", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rupees => "rupees",
            Self::Dollars => "dollars",
            Self::Euros => "euros",
            Self::Pounds => "pounds",
            Self::Yen => "yen",
        }
    }

    /// Map any recognized currency token onto a currency
    ///
    /// Tokens are matched case-insensitively by containment, checking the
    /// rupee family first and then dollars, euros, pounds and yen. The
    /// abbreviation "rs" only counts at the start of the token so that
    /// "dollars" is not mistaken for rupees. Empty or unknown tokens fall
    /// back to rupees.
    pub fn standardize(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            return Self::default();
        }

        if token.starts_with("rs") {
            return Self::Rupees;
        }

        CURRENCY_FRAGMENTS
            .iter()
            .find(|(_, fragments)| fragments.iter().any(|f| token.contains(f)))
            .map(|(currency, _)| *currency)
            .unwrap_or_default()
    }

    /// Check whether a whitespace-separated word names a currency
    pub fn is_currency_word(word: &str) -> bool {
        matches!(
            word.to_lowercase().as_str(),
            "rupees"
                | "rupee"
                | "rs"
                | "rs."
                | "inr"
                | "₹"
                | "dollars"
                | "dollar"
                | "usd"
                | "$"
                | "euros"
                | "euro"
                | "eur"
                | "€"
                | "pounds"
                | "pound"
                | "gbp"
                | "£"
                | "yen"
                | "jpy"
                | "¥"
        )
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Currency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::standardize(s))
    }
}
