//! Path management for the expense tracker
//!
//! Provides XDG-compliant path resolution for settings and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expense-tracker` or `~/.config/expense-tracker`
//! 3. Windows: `%APPDATA%\expense-tracker`

use std::path::PathBuf;

use crate::error::TrackerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all tracker data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/expense-tracker/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/expense-tracker/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the expense ledger
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.csv")
    }

    /// Get the path to budget.json
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Get the path to the advisory lock file guarding the data directory
    pub fn lock_file(&self) -> PathBuf {
        self.data_dir().join(".lock")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            TrackerError::Persistence(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            TrackerError::Persistence(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                TrackerError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("expense-tracker"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TrackerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("expense-tracker"))
}
