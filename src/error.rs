//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{CategoryParseError, MoneyParseError, PeriodParseError};

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A stored ledger row could not be parsed (fatal at startup)
    #[error("Corrupt ledger at row {row}: {reason}")]
    CorruptLedger { row: usize, reason: String },

    /// The stored budget record could not be parsed
    #[error("Corrupt budget file: {0}")]
    CorruptBudget(String),

    /// Durable read or write failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Input rejected at the engine or report boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Create a corrupt-ledger error for a 1-based data row
    pub fn corrupt_row(row: usize, reason: impl Into<String>) -> Self {
        Self::CorruptLedger {
            row,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<MoneyParseError> for TrackerError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CategoryParseError> for TrackerError {
    fn from(err: CategoryParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PeriodParseError> for TrackerError {
    fn from(err: PeriodParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
