//! Custom error types for famspend
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for famspend operations
#[derive(Error, Debug)]
pub enum FamspendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for input values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Free text that does not contain an expense amount
    #[error("Could not parse expense from: {0}")]
    Parse(String),

    /// Settlement errors
    #[error("Settlement error: {0}")]
    Settlement(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FamspendError {
    /// Create the error returned when a message has no amount in it
    pub fn unparseable(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create the error returned when settling an empty household
    pub fn no_participants() -> Self {
        Self::Settlement("no participants to settle".into())
    }

    /// Create the error returned when a sum of amounts does not fit in a `Decimal`
    pub fn amount_overflow(what: impl std::fmt::Display) -> Self {
        Self::Validation(format!("{} is too large to represent", what))
    }

    /// Create a "duplicate" error for settlement participants
    pub fn duplicate_participant(name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Participant",
            identifier: name.into(),
        }
    }

    /// Check if this is an unparseable-message error
    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FamspendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FamspendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FamspendError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for FamspendError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for famspend operations
pub type FamspendResult<T> = Result<T, FamspendError>;
