//! Expense tracker - personal expense ledger with a monthly budget
//!
//! This library records expenses, persists them, and derives budget
//! signals: the current month's total, per-category sums and the share of
//! the monthly budget already spent.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, months)
//! - `storage`: CSV ledger and JSON budget files
//! - `services`: Aggregation rules
//! - `tracker`: The ledger and budget store
//! - `reports`: Chart and alert inputs for presentation layers
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{TrackerPaths, Settings};
//! use expense_tracker::models::{ExpenseCategory, Money};
//! use expense_tracker::ExpenseTracker;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut tracker = ExpenseTracker::open(paths, &settings)?;
//! tracker.add_expense(Money::from_cents(1250), ExpenseCategory::Food, "lunch")?;
//! println!("{:.1}% used", tracker.get_budget_status().percentage_used);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod time;
pub mod tracker;

pub use error::{TrackerError, TrackerResult};
pub use tracker::ExpenseTracker;
