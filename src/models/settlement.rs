//! Settlement models
//!
//! Inputs and outputs of the settle-up computation. A settlement plan is
//! ephemeral: it is recomputed from contributions on every request.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How much one participant has paid in total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionEntry {
    pub participant_name: String,
    pub total_contributed: Money,
}

impl ContributionEntry {
    pub fn new(participant_name: impl Into<String>, total_contributed: Money) -> Self {
        Self {
            participant_name: participant_name.into(),
            total_contributed,
        }
    }
}

/// One payment in a settlement plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Participant who underpaid and sends money
    pub from: String,

    /// Participant who overpaid and receives money
    pub to: String,

    /// Amount, rounded to two fractional digits
    pub amount: Money,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

/// Result of settling a household's contributions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Sum of all contributions, rounded to two digits
    pub total: Money,

    /// Average contribution, rounded to two digits
    pub fair_share: Money,

    /// Currency label passed through from the caller
    pub currency: String,

    /// Transfers in the order they were emitted
    pub transfers: Vec<Transfer>,
}

impl SettlementResult {
    /// Check whether everyone is already square
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Total amount `participant` is asked to send
    pub fn total_sent_by(&self, participant: &str) -> Money {
        self.transfers
            .iter()
            .filter(|t| t.from == participant)
            .map(|t| t.amount)
            .sum()
    }

    /// Total amount `participant` is due to receive
    pub fn total_received_by(&self, participant: &str) -> Money {
        self.transfers
            .iter()
            .filter(|t| t.to == participant)
            .map(|t| t.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(from: &str, to: &str, units: i64) -> Transfer {
        Transfer {
            from: from.into(),
            to: to.into(),
            amount: Money::from_units(units),
        }
    }

    #[test]
    fn test_totals_per_participant() {
        let result = SettlementResult {
            total: Money::from_units(600),
            fair_share: Money::from_units(200),
            currency: "rupees".into(),
            transfers: vec![
                transfer("B", "A", 100),
                transfer("C", "A", 50),
                transfer("B", "D", 20),
            ],
        };

        assert_eq!(result.total_sent_by("B"), Money::from_units(120));
        assert_eq!(result.total_received_by("A"), Money::from_units(150));
        assert_eq!(result.total_received_by("B"), Money::zero());
        assert!(!result.is_settled());
    }

    #[test]
    fn test_transfer_display() {
        assert_eq!(transfer("B", "A", 66).to_string(), "B -> A: 66.00");
    }
}
