//! CSV Import service
//!
//! Reads a log of expense messages from CSV. Each row names a date, the
//! member who paid and a free-text message; the message goes through the
//! expense parser. Rows that cannot be read are reported by row number and
//! the rest of the file is still imported.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{FamspendError, FamspendResult};
use crate::models::ExpenseRecord;
use crate::services::parser::ExpenseParser;

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the member (payer) column
    pub member_column: usize,
    /// Index of the free-text expense message column
    pub message_column: usize,
    /// Date format string (e.g., "%Y-%m-%d", "%d/%m/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            member_column: 1,
            message_column: 2,
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: ',',
        }
    }
}

impl ColumnMapping {
    /// Create a new column mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether first row is header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Result of reading an expense log
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Expenses read successfully, in file order
    pub records: Vec<ExpenseRecord>,
    /// Error messages by row (1-indexed, excluding header)
    pub error_messages: BTreeMap<usize, String>,
}

impl ImportResult {
    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    parser: &'a ExpenseParser,
    mapping: ColumnMapping,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(parser: &'a ExpenseParser, mapping: ColumnMapping) -> Self {
        Self { parser, mapping }
    }

    /// Read an expense log from a file
    pub fn import_file(&self, path: &Path) -> FamspendResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.mapping.has_header)
            .delimiter(self.delimiter_byte()?)
            .flexible(true)
            .from_path(path)
            .map_err(|e| {
                FamspendError::Import(format!("Failed to open {}: {}", path.display(), e))
            })?;

        let result = self.import_from_reader(&mut reader);
        log::debug!(
            "Imported {} expenses from {} ({} rows rejected)",
            result.records.len(),
            path.display(),
            result.error_messages.len()
        );
        Ok(result)
    }

    /// Read an expense log from any CSV reader
    pub fn import_from_reader<R: std::io::Read>(&self, reader: &mut Reader<R>) -> ImportResult {
        let mut result = ImportResult::default();
        for (idx, parsed) in self.parse_csv_from_reader(reader).into_iter().enumerate() {
            match parsed {
                Ok(record) => result.records.push(record),
                Err(message) => {
                    result.error_messages.insert(idx + 1, message);
                }
            }
        }
        result
    }

    /// Parse every row, keeping one result per row
    pub fn parse_csv_from_reader<R: std::io::Read>(
        &self,
        reader: &mut Reader<R>,
    ) -> Vec<Result<ExpenseRecord, String>> {
        reader
            .records()
            .map(|row| match row {
                Ok(record) => self.parse_record(&record),
                Err(e) => Err(format!("Error reading CSV record: {}", e)),
            })
            .collect()
    }

    /// Parse a single CSV record
    fn parse_record(&self, record: &StringRecord) -> Result<ExpenseRecord, String> {
        let date_str = record
            .get(self.mapping.date_column)
            .ok_or_else(|| "Missing date column".to_string())?
            .trim();
        let date = NaiveDate::parse_from_str(date_str, &self.mapping.date_format)
            .map_err(|e| format!("Invalid date '{}': {}", date_str, e))?;

        let member = record
            .get(self.mapping.member_column)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| "Missing member".to_string())?;

        let message = record
            .get(self.mapping.message_column)
            .ok_or_else(|| "Missing message column".to_string())?;

        let parsed = self.parser.parse(message).map_err(|e| e.to_string())?;
        Ok(ExpenseRecord::from_parsed(parsed, member, date))
    }

    fn delimiter_byte(&self) -> FamspendResult<u8> {
        u8::try_from(self.mapping.delimiter).map_err(|_| {
            FamspendError::Import(format!(
                "Delimiter must be a single-byte character, got '{}'",
                self.mapping.delimiter
            ))
        })
    }
}
