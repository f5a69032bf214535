//! Household spending summary
//!
//! Aggregates expense records into per-member and per-category totals. Each
//! currency gets its own summary: amounts in different currencies are never
//! added together.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{FamspendError, FamspendResult};
use crate::models::{Category, ContributionEntry, Currency, ExpenseRecord, Money};

/// One member's spending in one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberTotal {
    pub member: String,
    pub total: Money,
    pub expense_count: usize,
    /// Percentage of the household total
    pub share_percent: Decimal,
    /// Paid minus fair share; positive means the member is owed money
    pub balance: Money,
}

/// Spending on one category in one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub expense_count: usize,
}

/// Everything spent in a single currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencySummary {
    pub currency: Currency,
    pub total: Money,
    pub fair_share: Money,
    /// Members in first-seen order
    pub members: Vec<MemberTotal>,
    /// Categories by total, largest first
    pub categories: Vec<CategoryTotal>,
}

impl CurrencySummary {
    /// Member totals as settlement input, in member order
    pub fn contributions(&self) -> Vec<ContributionEntry> {
        self.members
            .iter()
            .map(|m| ContributionEntry::new(m.member.clone(), m.total))
            .collect()
    }
}

/// Spending summaries for every currency present in a set of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HouseholdSummary {
    pub currencies: Vec<CurrencySummary>,
}

#[derive(Default)]
struct Tally {
    members: IndexMap<String, (Money, usize)>,
    categories: IndexMap<Category, (Money, usize)>,
}

impl HouseholdSummary {
    /// Summarize `records`
    ///
    /// `members` are listed first in every currency, with a zero total if
    /// they logged nothing in it, so that they take part in settlements.
    /// Other members follow in the order they first appear.
    ///
    /// # Errors
    ///
    /// Fails if a member, category or currency total does not fit in a
    /// `Decimal`.
    pub fn from_records(records: &[ExpenseRecord], members: &[String]) -> FamspendResult<Self> {
        let mut tallies: IndexMap<Currency, Tally> = IndexMap::new();

        for record in records {
            let tally = tallies.entry(record.currency).or_insert_with(|| {
                let mut tally = Tally::default();
                for member in members {
                    tally.members.insert(member.clone(), (Money::zero(), 0));
                }
                tally
            });

            let member = tally
                .members
                .entry(record.member.clone())
                .or_insert((Money::zero(), 0));
            member.0 = add_amount(member.0, record, "member total")?;
            member.1 += 1;

            let category = tally
                .categories
                .entry(record.category.clone())
                .or_insert((Money::zero(), 0));
            category.0 = add_amount(category.0, record, "category total")?;
            category.1 += 1;
        }

        let currencies = tallies
            .into_iter()
            .map(|(currency, tally)| summarize(currency, tally))
            .collect::<FamspendResult<Vec<_>>>()?;

        Ok(Self { currencies })
    }

    /// Summary for one currency, if anything was spent in it
    pub fn for_currency(&self, currency: Currency) -> Option<&CurrencySummary> {
        self.currencies.iter().find(|s| s.currency == currency)
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

fn add_amount(sum: Money, record: &ExpenseRecord, what: &str) -> FamspendResult<Money> {
    sum.checked_add(record.amount)
        .ok_or_else(|| FamspendError::amount_overflow(format!("{} in {}", what, record.currency)))
}

fn summarize(currency: Currency, tally: Tally) -> FamspendResult<CurrencySummary> {
    let total = Money::checked_sum(tally.members.values().map(|(amount, _)| *amount))
        .ok_or_else(|| FamspendError::amount_overflow(format!("total spent in {}", currency)))?;
    let fair_share = total
        .split_evenly(tally.members.len())
        .unwrap_or_default();

    let members = tally
        .members
        .into_iter()
        .map(|(member, (amount, count))| MemberTotal {
            member,
            total: amount,
            expense_count: count,
            share_percent: amount.percent_of(total),
            balance: (amount - fair_share).round2(),
        })
        .collect();

    let mut categories: Vec<CategoryTotal> = tally
        .categories
        .into_iter()
        .map(|(category, (amount, count))| CategoryTotal {
            category,
            total: amount,
            expense_count: count,
        })
        .collect();
    categories.sort_by(|a, b| b.total.cmp(&a.total));

    Ok(CurrencySummary {
        currency,
        total,
        fair_share: fair_share.round2(),
        members,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(member: &str, category: Category, units: i64, currency: Currency) -> ExpenseRecord {
        ExpenseRecord {
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            member: member.into(),
            category,
            amount: Money::from_units(units),
            currency,
            description: String::new(),
        }
    }

    #[test]
    fn test_member_and_category_totals() {
        let records = vec![
            record("Asha", Category::Groceries, 300, Currency::Rupees),
            record("Ravi", Category::Transportation, 100, Currency::Rupees),
            record("Asha", Category::Dining, 100, Currency::Rupees),
        ];
        let summary = HouseholdSummary::from_records(&records, &[]).unwrap();
        let rupees = summary.for_currency(Currency::Rupees).unwrap();

        assert_eq!(rupees.total, Money::from_units(500));
        assert_eq!(rupees.fair_share, Money::from_units(250));
        assert_eq!(rupees.members[0].member, "Asha");
        assert_eq!(rupees.members[0].total, Money::from_units(400));
        assert_eq!(rupees.members[0].expense_count, 2);
        assert_eq!(rupees.members[0].share_percent, dec!(80));
        assert_eq!(rupees.members[0].balance, Money::from_units(150));
        assert_eq!(rupees.members[1].balance, Money::from_units(-150));

        assert_eq!(rupees.categories[0].category, Category::Groceries);
        assert_eq!(rupees.categories[0].total, Money::from_units(300));
    }

    #[test]
    fn test_currencies_are_kept_apart() {
        let records = vec![
            record("Asha", Category::Groceries, 300, Currency::Rupees),
            record("Ravi", Category::Dining, 20, Currency::Dollars),
        ];
        let summary = HouseholdSummary::from_records(&records, &[]).unwrap();

        assert_eq!(summary.currencies.len(), 2);
        assert_eq!(summary.currencies[0].currency, Currency::Rupees);
        let dollars = summary.for_currency(Currency::Dollars).unwrap();
        assert_eq!(dollars.total, Money::from_units(20));
        assert_eq!(dollars.members.len(), 1);
        assert!(summary.for_currency(Currency::Yen).is_none());
    }

    #[test]
    fn test_seeded_members_included_with_zero() {
        let records = vec![record("Ravi", Category::Utilities, 900, Currency::Rupees)];
        let members = vec!["Asha".to_string(), "Ravi".to_string(), "Meera".to_string()];
        let summary = HouseholdSummary::from_records(&records, &members).unwrap();
        let rupees = summary.for_currency(Currency::Rupees).unwrap();

        let names: Vec<&str> = rupees.members.iter().map(|m| m.member.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Ravi", "Meera"]);
        assert_eq!(rupees.fair_share, Money::from_units(300));

        let contributions = rupees.contributions();
        assert_eq!(contributions[0].total_contributed, Money::zero());
        assert_eq!(contributions[1].total_contributed, Money::from_units(900));
    }

    #[test]
    fn test_empty_records() {
        let summary = HouseholdSummary::from_records(&[], &["Asha".to_string()]).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_overflowing_totals_are_errors() {
        let mut huge = record("Asha", Category::Groceries, 0, Currency::Rupees);
        huge.amount = Money::new(Decimal::MAX);
        let dining = record("Asha", Category::Dining, 1, Currency::Rupees);
        let same_member = vec![huge.clone(), dining];
        let err = HouseholdSummary::from_records(&same_member, &[]).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("member total in rupees"));

        let two_members = vec![huge, record("Ravi", Category::Dining, 1, Currency::Rupees)];
        let err = HouseholdSummary::from_records(&two_members, &[]).unwrap_err();
        assert!(err.to_string().contains("total spent in rupees"));
    }
}
