//! Expense category model
//!
//! A fixed set of named categories covers most household spending. Text
//! that fits none of them keeps its own (title-cased) label as a custom
//! category, so the set of categories seen in practice is open-ended.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an expense was for
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Groceries,
    Dining,
    Transportation,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
    PersonalCare,
    Household,
    /// Fallback when there is nothing to classify
    Miscellaneous,
    /// A free-form label synthesized from the expense text
    Custom(String),
}

impl Category {
    /// The named categories in declaration order
    ///
    /// This order is the tie-break order used by the classifier.
    pub fn named() -> [Category; 10] {
        [
            Self::Groceries,
            Self::Dining,
            Self::Transportation,
            Self::Utilities,
            Self::Entertainment,
            Self::Shopping,
            Self::Healthcare,
            Self::Education,
            Self::PersonalCare,
            Self::Household,
        ]
    }

    /// Categories that always appear on a monthly budget report
    pub const DEFAULT_BUDGETED: [Category; 7] = [
        Self::Groceries,
        Self::Dining,
        Self::Transportation,
        Self::Utilities,
        Self::Shopping,
        Self::Healthcare,
        Self::Miscellaneous,
    ];

    /// Display name of the category
    pub fn name(&self) -> &str {
        match self {
            Self::Groceries => "Groceries",
            Self::Dining => "Dining",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::PersonalCare => "Personal Care",
            Self::Household => "Household",
            Self::Miscellaneous => "Miscellaneous",
            Self::Custom(label) => label,
        }
    }

    /// Look up a category by name, case-insensitively
    ///
    /// Names outside the fixed set become custom categories verbatim.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("miscellaneous") {
            return Self::Miscellaneous;
        }
        Self::named()
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Custom(trimmed.to_string()))
    }

    /// Check whether this is a free-form category
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Category::PersonalCare.name(), "Personal Care");
        assert_eq!(Category::Custom("Pets".into()).to_string(), "Pets");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Category::from_name("groceries"), Category::Groceries);
        assert_eq!(Category::from_name("PERSONAL CARE"), Category::PersonalCare);
        assert_eq!(Category::from_name("Miscellaneous"), Category::Miscellaneous);
        assert_eq!(Category::from_name("Pets"), Category::Custom("Pets".into()));
    }

    #[test]
    fn test_named_order() {
        let named = Category::named();
        assert_eq!(named[0], Category::Groceries);
        assert_eq!(named[9], Category::Household);
        assert!(named.iter().all(|c| !c.is_custom()));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Category::PersonalCare).unwrap();
        assert_eq!(json, "\"Personal Care\"");

        let back: Category = serde_json::from_str("\"Dining\"").unwrap();
        assert_eq!(back, Category::Dining);

        let custom: Category = serde_json::from_str("\"Pets\"").unwrap();
        assert!(custom.is_custom());
    }
}
