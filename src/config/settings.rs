//! Household settings for famspend
//!
//! Manages preferences such as the default currency, the settlement
//! tolerance and the list of household members.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::paths::FamspendPaths;
use crate::error::FamspendError;
use crate::models::Currency;
use crate::services::settlement::DEFAULT_TOLERANCE;

/// Household settings for famspend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name shown on reports and exports
    #[serde(default = "default_household_name")]
    pub household_name: String,

    /// Currency used when an expense or budget does not name one
    #[serde(default)]
    pub default_currency: Currency,

    /// Imbalances at or below this amount are treated as settled
    #[serde(default = "default_settlement_tolerance")]
    pub settlement_tolerance: Decimal,

    /// Date format used by CSV import and export (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Household members, included in settlements even when they paid nothing
    #[serde(default)]
    pub members: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_household_name() -> String {
    "Family Expenses".to_string()
}

fn default_settlement_tolerance() -> Decimal {
    DEFAULT_TOLERANCE
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            household_name: default_household_name(),
            default_currency: Currency::default(),
            settlement_tolerance: default_settlement_tolerance(),
            date_format: default_date_format(),
            members: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FamspendPaths) -> Result<Self, FamspendError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FamspendError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FamspendError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FamspendPaths) -> Result<(), FamspendError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FamspendError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FamspendError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Validate loaded settings
    pub fn validate(&self) -> Result<(), FamspendError> {
        if self.settlement_tolerance.is_sign_negative() {
            return Err(FamspendError::Config(format!(
                "settlement_tolerance must not be negative, got {}",
                self.settlement_tolerance
            )));
        }
        Ok(())
    }
}
