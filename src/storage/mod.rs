//! Storage layer for the expense tracker
//!
//! Provides the CSV ledger and JSON budget files with atomic writes, an
//! advisory lock around each read-modify-write, and first-run creation of
//! both files.

pub mod budget;
pub mod file_io;
pub mod ledger;
pub mod lock;

pub use budget::BudgetRepository;
pub use file_io::{write_atomic, write_json_atomic};
pub use ledger::LedgerRepository;
pub use lock::StoreLock;

use std::time::Duration;

use tracing::info;

use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Main storage coordinator that owns both repositories
pub struct Storage {
    paths: TrackerPaths,
    lock_timeout: Duration,
    pub ledger: LedgerRepository,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Open storage, creating and persisting any missing file immediately
    ///
    /// A missing ledger becomes an empty one, a missing budget file gets
    /// `settings.default_monthly_budget`. Existing files are loaded; an
    /// unparseable ledger row fails with `CorruptLedger`.
    pub fn open(paths: TrackerPaths, settings: &Settings) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        let default_budget = Money::from_decimal(settings.default_monthly_budget)
            .ok()
            .filter(|m| !m.is_negative())
            .ok_or_else(|| {
                TrackerError::Config(format!(
                    "default_monthly_budget must be a non-negative number, got {}",
                    settings.default_monthly_budget
                ))
            })?;

        let mut storage = Self {
            ledger: LedgerRepository::new(paths.expenses_file()),
            budget: BudgetRepository::new(paths.budget_file(), default_budget),
            lock_timeout: settings.lock_timeout(),
            paths,
        };

        let _lock = storage.lock()?;

        if storage.ledger.exists() {
            storage.ledger.load()?;
        } else {
            storage.ledger.save()?;
            info!(path = %storage.ledger.path().display(), "created empty ledger");
        }

        if storage.budget.exists() {
            storage.budget.load()?;
        } else {
            storage.budget.save()?;
            info!(budget = %default_budget, "created budget file with default budget");
        }

        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Acquire the store lock for a read-modify-write cycle
    pub fn lock(&self) -> TrackerResult<StoreLock> {
        StoreLock::acquire(&self.paths.lock_file(), self.lock_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_in(temp_dir: &TempDir) -> TrackerResult<Storage> {
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        Storage::open(paths, &Settings::default())
    }

    #[test]
    fn test_first_open_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let storage = open_in(&temp_dir).unwrap();

        assert!(storage.paths().expenses_file().exists());
        assert!(storage.paths().budget_file().exists());
        assert!(!storage.paths().lock_file().exists());
        assert!(storage.ledger.is_empty());
        assert_eq!(storage.budget.get(), Money::from_cents(100_000));
    }

    #[test]
    fn test_existing_files_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.expenses_file(),
            "date,amount,category,description\n2025-01-15 12:00:00,9.99,Shopping,socks\n",
        )
        .unwrap();
        std::fs::write(paths.budget_file(), r#"{"monthly_budget": 420}"#).unwrap();

        let storage = open_in(&temp_dir).unwrap();
        assert_eq!(storage.ledger.len(), 1);
        assert_eq!(storage.budget.get(), Money::from_cents(42_000));
    }

    #[test]
    fn test_corrupt_ledger_fails_open() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.expenses_file(),
            "date,amount,category,description\nyesterday,9.99,Shopping,socks\n",
        )
        .unwrap();

        let result = open_in(&temp_dir);
        assert!(matches!(result, Err(TrackerError::CorruptLedger { row: 1, .. })));
        // Lock released even on failure
        assert!(!paths.lock_file().exists());
    }

    #[test]
    fn test_open_recovers_from_abandoned_lock() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.lock_file(), "").unwrap();
        std::fs::File::options()
            .write(true)
            .open(paths.lock_file())
            .unwrap()
            .set_modified(std::time::SystemTime::now() - lock::STALE_AFTER * 2)
            .unwrap();

        let settings = Settings {
            lock_timeout_ms: 200,
            ..Settings::default()
        };
        let storage = Storage::open(paths, &settings).unwrap();
        assert!(storage.budget.exists());
        assert!(!storage.paths().lock_file().exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_open_ignores_lock_of_dead_process() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.lock_file(), format!("{}\n", u32::MAX)).unwrap();

        let settings = Settings {
            lock_timeout_ms: 200,
            ..Settings::default()
        };
        for _ in 0..2 {
            let storage = Storage::open(paths.clone(), &settings).unwrap();
            assert!(storage.ledger.is_empty());
        }
    }

    #[test]
    fn test_negative_default_budget_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            default_monthly_budget: -1.0,
            ..Settings::default()
        };

        assert!(matches!(
            Storage::open(paths, &settings),
            Err(TrackerError::Config(_))
        ));
    }
}
