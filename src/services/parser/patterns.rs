//! Expense message patterns
//!
//! Each pattern knows one way an expense can be phrased. The parser tries
//! them in priority order and keeps the first match, so the order of
//! [`standard_patterns`] is part of the parsing behavior.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Currency, Money};

/// Amount as plain ASCII digits with an optional fraction, starting at a
/// word boundary. At most 28 integer digits, so every capture fits in a
/// `Decimal`.
const AMOUNT: &str = r"\b([0-9]{1,28}(?:\.[0-9]+)?)";

/// Recognized currency tokens. Alternatives are tried left to right.
const CURRENCY: &str =
    r"(rupees?|rs\.?|inr|₹|dollars?|usd|\$|euros?|eur|€|pounds?|gbp|£|yen|jpy|¥)";

const SPENDING_VERB: &str = r"(?:spent|paid|gave|bought|got|purchased|ordered)";

/// What a pattern extracted from a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub amount: Money,
    pub currency: Currency,
    /// Raw phrase read as the category, trimmed
    pub category_text: String,
}

/// One way of reading an expense out of a message
pub trait ExpensePattern: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Try to read an expense from the message
    fn attempt(&self, message: &str) -> Option<PatternMatch>;
}

/// Capture group positions within a [`RegexPattern`]
#[derive(Debug, Clone, Copy)]
struct Groups {
    amount: usize,
    currency: usize,
    category: usize,
}

/// Which part of the message a [`RegexPattern`] looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// The text before the first hyphen, which must match in full
    Head,
    /// The whole message, matched anywhere
    Message,
}

/// A pattern backed by a single regular expression
pub struct RegexPattern {
    name: &'static str,
    regex: Regex,
    groups: Groups,
    scope: Scope,
}

impl RegexPattern {
    fn new(name: &'static str, pattern: &str, groups: Groups, scope: Scope) -> Self {
        let regex = Regex::new(&format!("(?i){}", pattern))
            .unwrap_or_else(|e| panic!("expense pattern '{}' is invalid: {}", name, e));
        Self {
            name,
            regex,
            groups,
            scope,
        }
    }

    /// A pattern that must account for the whole message head, the part
    /// before any "- description"
    fn whole(name: &'static str, body: &str, groups: Groups) -> Self {
        Self::new(name, &format!("^{}$", body), groups, Scope::Head)
    }

    /// A pattern that may match anywhere in the message
    fn scan(name: &'static str, body: &str, groups: Groups) -> Self {
        Self::new(name, body, groups, Scope::Message)
    }
}

/// The message up to its first hyphen, trimmed
fn message_head(message: &str) -> &str {
    message
        .split_once('-')
        .map_or(message, |(head, _)| head)
        .trim()
}

impl ExpensePattern for RegexPattern {
    fn name(&self) -> &'static str {
        self.name
    }

    fn attempt(&self, message: &str) -> Option<PatternMatch> {
        let text = match self.scope {
            Scope::Head => message_head(message),
            Scope::Message => message,
        };
        let caps = self.regex.captures(text)?;
        let amount = Money::parse(caps.get(self.groups.amount)?.as_str()).ok()?;
        let currency = Currency::standardize(caps.get(self.groups.currency)?.as_str());
        let category_text = caps
            .get(self.groups.category)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        Some(PatternMatch {
            amount,
            currency,
            category_text,
        })
    }
}

/// Last resort: the first number anywhere, with the category taken from
/// the words around it and the currency left at its default
pub struct BareNumberPattern;

static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,28}(?:\.[0-9]+)?").expect("bare number pattern is valid")
});

impl ExpensePattern for BareNumberPattern {
    fn name(&self) -> &'static str {
        "bare-number"
    }

    fn attempt(&self, message: &str) -> Option<PatternMatch> {
        let number = BARE_NUMBER.find(message)?.as_str();
        let amount = Money::parse(number).ok()?;

        let words: Vec<&str> = message.split_whitespace().collect();
        let category_text = match words.iter().position(|w| w.contains(number)) {
            Some(idx) => {
                let next_is_currency = words
                    .get(idx + 1)
                    .is_some_and(|next| Currency::is_currency_word(next));

                if idx + 1 < words.len() && !next_is_currency {
                    words[idx + 1..].join(" ")
                } else if idx > 0 {
                    words[..idx].join(" ")
                } else {
                    "Miscellaneous".to_string()
                }
            }
            None => "Miscellaneous".to_string(),
        };

        Some(PatternMatch {
            amount,
            currency: Currency::default(),
            category_text,
        })
    }
}

/// The standard cascade, highest priority first
pub fn standard_patterns() -> Vec<Box<dyn ExpensePattern>> {
    vec![
        // "Groceries 450 rupees"
        Box::new(RegexPattern::whole(
            "category-amount",
            &format!(r"([\w\s]+?)\s+{AMOUNT}\s*{CURRENCY}"),
            Groups {
                amount: 2,
                currency: 3,
                category: 1,
            },
        )),
        // "450 rupees for groceries"
        Box::new(RegexPattern::whole(
            "amount-category",
            &format!(r"{AMOUNT}\s*{CURRENCY}\s+(?:for|on|at)?\s+([\w\s]+)"),
            Groups {
                amount: 1,
                currency: 2,
                category: 3,
            },
        )),
        // "spent 450 rupees on groceries"
        Box::new(RegexPattern::whole(
            "verb-amount-category",
            &format!(r"{SPENDING_VERB}\s+{AMOUNT}\s*{CURRENCY}\s+(?:for|on|at|to)?\s+([\w\s]+)"),
            Groups {
                amount: 1,
                currency: 2,
                category: 3,
            },
        )),
        // "groceries cost 450 rupees"
        Box::new(RegexPattern::whole(
            "category-verb-amount",
            &format!(r"([\w\s]+?)(?:\s+(?:cost|costs|was|is|came to))\s+{AMOUNT}\s*{CURRENCY}"),
            Groups {
                amount: 2,
                currency: 3,
                category: 1,
            },
        )),
        // "... 450 rupees - groceries ..."
        Box::new(RegexPattern::scan(
            "amount-then-text",
            &format!(r"{AMOUNT}\s*{CURRENCY}(?:[^a-zA-Z0-9]*)([\w\s]+)"),
            Groups {
                amount: 1,
                currency: 2,
                category: 3,
            },
        )),
        // "... 450 rupees, mostly for groceries"
        Box::new(RegexPattern::scan(
            "amount-then-preposition",
            &format!(r"\s+{AMOUNT}\s*{CURRENCY}(?:.*?)(?: for | on | at )+([\w\s]+)"),
            Groups {
                amount: 1,
                currency: 2,
                category: 3,
            },
        )),
        Box::new(BareNumberPattern),
    ]
}
