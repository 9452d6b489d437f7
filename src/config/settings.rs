//! User settings for the expense tracker
//!
//! Manages display preferences, the first-run budget, lock timeout and
//! log verbosity.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for expense listings (strftime format)
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Budget written to budget.json when no budget file exists yet
    #[serde(default = "default_monthly_budget")]
    pub default_monthly_budget: f64,

    /// How long a writer waits for the store lock before giving up
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_monthly_budget() -> f64 {
    1000.0
}

fn default_lock_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            datetime_format: default_datetime_format(),
            default_monthly_budget: default_monthly_budget(),
            lock_timeout_ms: default_lock_timeout_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Persistence(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Persistence(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Lock timeout as a Duration
    pub fn lock_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.lock_timeout_ms)
    }
}
