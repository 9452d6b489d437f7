//! Budget repository for JSON storage
//!
//! Manages loading and saving the monthly budget to budget.json, a single
//! object of the form `{"monthly_budget": 1000.0}`. There is no history:
//! every save overwrites the previous value.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

use super::file_io::{read_if_exists, write_json_atomic};

/// Serializable budget record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BudgetData {
    monthly_budget: f64,
}

/// Repository for the monthly budget
pub struct BudgetRepository {
    path: PathBuf,
    monthly_budget: Money,
}

impl BudgetRepository {
    /// Create a new budget repository holding `initial` until loaded
    pub fn new(path: PathBuf, initial: Money) -> Self {
        Self {
            path,
            monthly_budget: initial,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Whether the budget file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the budget from disk; a missing file keeps the current value
    pub fn load(&mut self) -> TrackerResult<()> {
        let Some(contents) = read_if_exists(&self.path)? else {
            return Ok(());
        };

        let data: BudgetData = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::CorruptBudget(format!("{}: {}", self.path.display(), e))
        })?;

        let amount = Money::from_decimal(data.monthly_budget).map_err(|e| {
            TrackerError::CorruptBudget(format!("{}: {}", self.path.display(), e))
        })?;
        if amount.is_negative() {
            return Err(TrackerError::CorruptBudget(format!(
                "{}: negative monthly_budget {}",
                self.path.display(),
                data.monthly_budget
            )));
        }

        self.monthly_budget = amount;
        debug!(path = %self.path.display(), budget = %amount, "loaded budget");
        Ok(())
    }

    /// Overwrite the budget file with the in-memory value
    pub fn save(&self) -> TrackerResult<()> {
        let data = BudgetData {
            monthly_budget: self.monthly_budget.to_decimal(),
        };
        write_json_atomic(&self.path, &data)?;
        debug!(path = %self.path.display(), budget = %self.monthly_budget, "saved budget");
        Ok(())
    }

    pub fn get(&self) -> Money {
        self.monthly_budget
    }

    /// Set the budget in memory (call `save` to persist)
    pub fn set(&mut self, amount: Money) {
        self.monthly_budget = amount;
    }
}
