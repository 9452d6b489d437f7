//! Expense record model
//!
//! An expense is an immutable, timestamped spending event. Records are
//! identified by their position in the ledger; there is no separate key.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Local time the expense was recorded
    pub timestamp: NaiveDateTime,

    /// Amount spent (positive)
    pub amount: Money,

    /// Spending category
    pub category: ExpenseCategory,

    /// Free-text note, may be empty
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        timestamp: NaiveDateTime,
        amount: Money,
        category: ExpenseCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Validate the record for insertion
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.category,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
