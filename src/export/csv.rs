//! CSV Export functionality
//!
//! Exports expense records to a spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::{FamspendError, FamspendResult};
use crate::models::ExpenseRecord;

/// Column headers of the expense CSV
pub const EXPENSE_CSV_HEADER: &str = "Date,Person,Category,Amount,Currency,Description";

/// Export expense records to CSV, one row per expense
pub fn export_expenses_csv<W: Write>(
    records: &[ExpenseRecord],
    date_format: &str,
    writer: &mut W,
) -> FamspendResult<()> {
    writeln!(writer, "{}", EXPENSE_CSV_HEADER)
        .map_err(|e| FamspendError::Export(e.to_string()))?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            record.date.format(date_format),
            escape_csv(&record.member),
            escape_csv(record.category.name()),
            record.amount,
            record.currency,
            escape_csv(&record.description)
        )
        .map_err(|e| FamspendError::Export(e.to_string()))?;
    }

    Ok(())
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Currency, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_csv_export() {
        let records = vec![
            ExpenseRecord {
                date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                member: "Asha".into(),
                category: Category::PersonalCare,
                amount: Money::new(dec!(450.5)),
                currency: Currency::Rupees,
                description: "haircut, tip included".into(),
            },
            ExpenseRecord {
                date: NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
                member: "Ravi".into(),
                category: Category::Dining,
                amount: Money::from_units(20),
                currency: Currency::Dollars,
                description: String::new(),
            },
        ];

        let mut output = Vec::new();
        export_expenses_csv(&records, "%Y-%m-%d", &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();

        assert_eq!(lines[0], EXPENSE_CSV_HEADER);
        assert_eq!(
            lines[1],
            "2025-01-15,Asha,Personal Care,450.50,rupees,\"haircut, tip included\""
        );
        assert_eq!(lines[2], "2025-01-16,Ravi,Dining,20.00,dollars,");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
