//! Settlement display formatting

use crate::models::SettlementResult;

/// Format a settlement plan
pub fn format_settlement(result: &SettlementResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total spent: {} {}\n", result.total, result.currency));
    output.push_str(&format!("Fair share:  {} {}\n", result.fair_share, result.currency));
    output.push('\n');

    if result.is_settled() {
        output.push_str("Everyone is settled up.\n");
        return output;
    }

    output.push_str("Transfers:\n");
    for transfer in &result.transfers {
        output.push_str(&format!(
            "  {} pays {} {} {}\n",
            transfer.from, transfer.to, transfer.amount, result.currency
        ));
    }
    output
}
