//! Settle-up computation
//!
//! Given how much each participant paid, works out who should pay whom so
//! that everyone ends up having paid the fair share (the average). The
//! matching is greedy: the largest debtor pays the largest creditor until
//! one of them is square, then the next pair is taken. This does not always
//! give the fewest transfers, but it terminates in at most
//! `creditors + debtors - 1` steps and its output is stable for a given
//! input order.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{FamspendError, FamspendResult};
use crate::models::{ContributionEntry, Money, SettlementResult, Transfer};

/// Imbalances at or below this many currency units count as settled
pub const DEFAULT_TOLERANCE: Decimal = Decimal::ONE;

/// A participant's outstanding imbalance during matching
#[derive(Debug, Clone)]
struct Balance<'a> {
    name: &'a str,
    remaining: Money,
}

/// Computes settlement plans
#[derive(Debug, Clone, Copy)]
pub struct SettlementSolver {
    tolerance: Money,
}

impl Default for SettlementSolver {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl SettlementSolver {
    /// Create a solver with the given deadband
    pub fn new(tolerance: Decimal) -> Self {
        Self {
            tolerance: Money::new(tolerance.abs()),
        }
    }

    /// The deadband below which imbalances are ignored
    pub fn tolerance(&self) -> Money {
        self.tolerance
    }

    /// Compute the transfers that equalize everyone's contributions
    ///
    /// `currency` is only carried through to the result; amounts are never
    /// converted.
    ///
    /// # Errors
    ///
    /// Fails when `contributions` is empty, when a participant appears twice,
    /// or when a contribution is negative.
    pub fn settle(
        &self,
        contributions: &[ContributionEntry],
        currency: &str,
    ) -> FamspendResult<SettlementResult> {
        if contributions.is_empty() {
            return Err(FamspendError::no_participants());
        }
        validate_contributions(contributions)?;

        let total = Money::checked_sum(contributions.iter().map(|c| c.total_contributed))
            .ok_or_else(|| FamspendError::Settlement("contributions total overflows".into()))?;
        let fair_share = if total.is_zero() {
            Money::zero()
        } else {
            total.split_evenly(contributions.len()).ok_or_else(|| {
                FamspendError::Settlement(format!("cannot divide {} between participants", total))
            })?
        };
        log::debug!(
            "Settling {} participants: total {}, fair share {}",
            contributions.len(),
            total,
            fair_share
        );

        let mut creditors = Vec::new();
        let mut debtors = Vec::new();
        for entry in contributions {
            let difference = entry.total_contributed - fair_share;
            if difference > self.tolerance {
                creditors.push(Balance {
                    name: &entry.participant_name,
                    remaining: difference,
                });
            } else if difference < -self.tolerance {
                debtors.push(Balance {
                    name: &entry.participant_name,
                    remaining: difference.abs(),
                });
            }
        }

        // stable sort keeps input order among equal imbalances
        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

        let transfers = self.match_greedy(creditors, debtors);

        Ok(SettlementResult {
            total: total.round2(),
            fair_share: fair_share.round2(),
            currency: currency.to_string(),
            transfers,
        })
    }

    fn match_greedy(
        &self,
        mut creditors: Vec<Balance<'_>>,
        mut debtors: Vec<Balance<'_>>,
    ) -> Vec<Transfer> {
        let mut transfers = Vec::new();
        let (mut ci, mut di) = (0, 0);

        while ci < creditors.len() && di < debtors.len() {
            let creditor = &mut creditors[ci];
            let debtor = &mut debtors[di];

            let amount = debtor.remaining.min(creditor.remaining);
            let transfer = Transfer {
                from: debtor.name.to_string(),
                to: creditor.name.to_string(),
                amount: amount.round2(),
            };
            log::debug!("Transfer {}", transfer);
            transfers.push(transfer);

            debtor.remaining -= amount;
            creditor.remaining -= amount;

            if self.is_cleared(debtor.remaining) {
                di += 1;
            }
            if self.is_cleared(creditor.remaining) {
                ci += 1;
            }
        }

        transfers
    }

    /// A party drops out once what it still owes or is owed falls under the
    /// deadband. Zero always clears, even with a zero deadband.
    fn is_cleared(&self, remaining: Money) -> bool {
        remaining < self.tolerance || !remaining.is_positive()
    }
}

fn validate_contributions(contributions: &[ContributionEntry]) -> FamspendResult<()> {
    let mut seen = HashSet::new();
    for entry in contributions {
        if !seen.insert(entry.participant_name.as_str()) {
            return Err(FamspendError::duplicate_participant(&entry.participant_name));
        }
        if entry.total_contributed.is_negative() {
            return Err(FamspendError::Validation(format!(
                "Contribution for '{}' cannot be negative: {}",
                entry.participant_name, entry.total_contributed
            )));
        }
    }
    Ok(())
}

/// Settle contributions with the default one-unit deadband
pub fn compute_settlements(
    contributions: &[ContributionEntry],
    currency: &str,
) -> FamspendResult<SettlementResult> {
    SettlementSolver::default().settle(contributions, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entries(values: &[(&str, i64)]) -> Vec<ContributionEntry> {
        values
            .iter()
            .map(|(name, units)| ContributionEntry::new(*name, Money::from_units(*units)))
            .collect()
    }

    fn transfer(from: &str, to: &str, amount: Decimal) -> Transfer {
        Transfer {
            from: from.into(),
            to: to.into(),
            amount: Money::new(amount),
        }
    }

    #[test]
    fn test_one_creditor_two_debtors() {
        let result = compute_settlements(
            &entries(&[("A", 300), ("B", 100), ("C", 100)]),
            "rupees",
        )
        .unwrap();

        assert_eq!(result.total, Money::from_units(500));
        assert_eq!(result.fair_share.amount(), dec!(166.67));
        assert_eq!(result.currency, "rupees");
        assert_eq!(
            result.transfers,
            vec![
                transfer("B", "A", dec!(66.67)),
                transfer("C", "A", dec!(66.67)),
            ]
        );
    }

    #[test]
    fn test_equal_contributions_need_no_transfers() {
        let result = compute_settlements(&entries(&[("A", 100), ("B", 100)]), "rupees").unwrap();
        assert_eq!(result.fair_share, Money::from_units(100));
        assert!(result.is_settled());
    }

    #[test]
    fn test_empty_is_an_error() {
        let err = compute_settlements(&[], "rupees").unwrap_err();
        assert!(matches!(err, FamspendError::Settlement(_)));
    }

    #[test]
    fn test_all_zero_contributions() {
        let contributions = entries(&[("A", 0), ("B", 0), ("C", 0)]);
        let result = compute_settlements(&contributions, "yen").unwrap();
        assert_eq!(result.total, Money::zero());
        assert_eq!(result.fair_share, Money::zero());
        assert!(result.is_settled());
    }

    #[test]
    fn test_single_participant() {
        let result = compute_settlements(&entries(&[("A", 250)]), "rupees").unwrap();
        assert_eq!(result.fair_share, Money::from_units(250));
        assert!(result.is_settled());
    }

    #[test]
    fn test_imbalance_within_deadband_is_ignored() {
        // fair share 100.5; both differences are 0.5
        let result = compute_settlements(&entries(&[("A", 101), ("B", 100)]), "rupees").unwrap();
        assert!(result.is_settled());
    }

    #[test]
    fn test_custom_tolerance() {
        let solver = SettlementSolver::new(dec!(0.1));
        let result = solver
            .settle(&entries(&[("A", 101), ("B", 100)]), "rupees")
            .unwrap();
        assert_eq!(result.transfers, vec![transfer("B", "A", dec!(0.5))]);
    }

    #[test]
    fn test_zero_tolerance_terminates() {
        let solver = SettlementSolver::new(Decimal::ZERO);
        let result = solver
            .settle(&entries(&[("A", 30), ("B", 0), ("C", 0)]), "rupees")
            .unwrap();
        assert_eq!(
            result.transfers,
            vec![transfer("B", "A", dec!(10)), transfer("C", "A", dec!(10))]
        );
    }

    #[test]
    fn test_debtor_splits_across_creditors() {
        let contributions = entries(&[("A", 300), ("B", 200), ("C", 0), ("D", 0)]);
        let result = compute_settlements(&contributions, "rupees").unwrap();

        // fair share 125: A +175, B +75, C -125, D -125
        assert_eq!(
            result.transfers,
            vec![
                transfer("C", "A", dec!(125)),
                transfer("D", "A", dec!(50)),
                transfer("D", "B", dec!(75)),
            ]
        );
    }

    #[test]
    fn test_transfers_never_exceed_imbalances() {
        let contributions = entries(&[
            ("Asha", 1200),
            ("Ravi", 50),
            ("Meera", 640),
            ("Kabir", 0),
            ("Zoya", 333),
        ]);
        let result = compute_settlements(&contributions, "rupees").unwrap();
        let fair_share = Money::from_units(2223).split_evenly(5).unwrap();
        let slack = Money::new(dec!(0.01));

        for entry in &contributions {
            let difference = entry.total_contributed - fair_share;
            let sent = result.total_sent_by(&entry.participant_name);
            let received = result.total_received_by(&entry.participant_name);
            if difference.is_negative() {
                assert!(sent <= difference.abs() + slack);
                assert!(received.is_zero());
            } else {
                assert!(received <= difference + slack);
                assert!(sent.is_zero());
            }
        }
        assert!(result.transfers.len() <= contributions.len() - 1);
    }

    #[test]
    fn test_deterministic() {
        let contributions = entries(&[("A", 90), ("B", 10), ("C", 10), ("D", 50)]);
        let first = compute_settlements(&contributions, "rupees").unwrap();
        for _ in 0..5 {
            assert_eq!(compute_settlements(&contributions, "rupees").unwrap(), first);
        }
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let contributions = vec![
            ContributionEntry::new("A", Money::new(Decimal::MAX)),
            ContributionEntry::new("B", Money::from_units(1)),
        ];

        let err = compute_settlements(&contributions, "rupees").unwrap_err();
        assert!(matches!(err, FamspendError::Settlement(_)));
        assert_eq!(err.to_string(), "Settlement error: contributions total overflows");
    }

    #[test]
    fn test_largest_representable_total_settles() {
        let contributions = vec![
            ContributionEntry::new("A", Money::new(Decimal::MAX)),
            ContributionEntry::new("B", Money::zero()),
        ];

        let result = compute_settlements(&contributions, "rupees").unwrap();
        assert_eq!(result.total, Money::new(Decimal::MAX));
        assert_eq!(result.transfers.len(), 1);
        assert_eq!(result.transfers[0].from, "B");
    }

    #[test]
    fn test_rejects_duplicates_and_negatives() {
        let duplicate = entries(&[("A", 10), ("A", 20)]);
        assert!(matches!(
            compute_settlements(&duplicate, "rupees").unwrap_err(),
            FamspendError::Duplicate { .. }
        ));

        let negative = entries(&[("A", 10), ("B", -20)]);
        assert!(compute_settlements(&negative, "rupees")
            .unwrap_err()
            .is_validation());
    }
}
