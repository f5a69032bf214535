//! Path management for famspend
//!
//! ## Path Resolution Order
//!
//! 1. `FAMSPEND_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/famspend` or `~/.config/famspend`
//! 3. Windows: `%APPDATA%\famspend`

use std::path::PathBuf;

use crate::error::FamspendError;

/// Manages all paths used by famspend
#[derive(Debug, Clone)]
pub struct FamspendPaths {
    base_dir: PathBuf,
}

impl FamspendPaths {
    /// Create a new FamspendPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FamspendError> {
        let base_dir = if let Ok(custom) = std::env::var("FAMSPEND_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FamspendPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/famspend/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location of the monthly budgets file
    pub fn budgets_file(&self) -> PathBuf {
        self.base_dir.join("budgets.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FamspendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FamspendError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if famspend has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FamspendError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FamspendError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("famspend"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FamspendError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FamspendError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("famspend"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FamspendPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.budgets_file(), temp_dir.path().join("budgets.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("FAMSPEND_DATA_DIR", custom_path);
        let paths = FamspendPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
        env::remove_var("FAMSPEND_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("famspend");
        let paths = FamspendPaths::with_base_dir(nested.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
