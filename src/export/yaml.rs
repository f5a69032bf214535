//! YAML Export functionality
//!
//! Exports the household report to YAML for human-readable sharing.

use std::io::Write;

use crate::error::{FamspendError, FamspendResult};
use crate::export::json::HouseholdReport;

/// Export the household report to YAML format
pub fn export_report_yaml<W: Write>(
    report: &HouseholdReport,
    writer: &mut W,
) -> FamspendResult<()> {
    write_header(report, writer).map_err(|e| FamspendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| FamspendError::Export(e.to_string()))?;

    Ok(())
}

fn write_header<W: Write>(report: &HouseholdReport, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "# famspend household report: {}", report.household_name)?;
    writeln!(writer, "# Generated: {}", report.exported_at)?;
    writeln!(writer, "# App Version: {}", report.app_version)?;
    writeln!(writer, "#")?;
    writeln!(
        writer,
        "# Amounts are never converted between currencies; each currency is"
    )?;
    writeln!(writer, "# summarized and settled on its own.")?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{Category, Currency, ExpenseRecord, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let records = vec![ExpenseRecord {
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            member: "Asha".into(),
            category: Category::Utilities,
            amount: Money::from_units(1500),
            currency: Currency::Rupees,
            description: "electricity".into(),
        }];
        let report = HouseholdReport::build(&records, &Settings::default()).unwrap();

        let mut output = Vec::new();
        export_report_yaml(&report, &mut output).unwrap();
        let yaml_string = String::from_utf8(output).unwrap();

        assert!(yaml_string.starts_with("# famspend household report: Family Expenses"));
        assert!(yaml_string.contains("schema_version:"));
        assert!(yaml_string.contains("category: Utilities"));
        assert!(yaml_string.contains("member: Asha"));
    }
}
