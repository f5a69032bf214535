//! Configuration module for famspend
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Household settings persistence

pub mod paths;
pub mod settings;

pub use paths::FamspendPaths;
pub use settings::Settings;
