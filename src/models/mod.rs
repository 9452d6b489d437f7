//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: money
//! amounts, categories, expense records and calendar months.

pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use category::{CategoryParseError, ExpenseCategory};
pub use expense::{ExpenseRecord, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
pub use period::{MonthPeriod, PeriodParseError};
