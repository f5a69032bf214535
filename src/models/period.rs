//! Budget month representation
//!
//! Budgets are tracked per calendar month (e.g., "2025-01").

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month that budgets and spending are grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, returning `None` if `month` is not 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current local month
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError(s.to_string()))?;

        let year: i32 = year.parse().map_err(|_| MonthParseError(s.to_string()))?;
        let month: u32 = month.parse().map_err(|_| MonthParseError(s.to_string()))?;

        Self::new(year, month).ok_or_else(|| MonthParseError(s.to_string()))
    }
}

impl TryFrom<String> for Month {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

/// Error returned for text that is not a `YYYY-MM` month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}', expected YYYY-MM", self.0)
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let month: Month = "2025-01".parse().unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 1);
        assert_eq!(month.to_string(), "2025-01");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("2025-13".parse::<Month>().is_err());
        assert!("2025".parse::<Month>().is_err());
        assert!("jan-2025".parse::<Month>().is_err());
    }

    #[test]
    fn test_contains() {
        let month = Month::new(2025, 2).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
    }

    #[test]
    fn test_serde_as_string() {
        let month = Month::new(2024, 11).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-11\"");
        assert!(serde_json::from_str::<Month>("\"2024-00\"").is_err());
    }
}
