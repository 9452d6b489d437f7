//! Display formatting for terminal output
//!
//! Provides utilities for formatting tracker data for terminal display:
//! the expense table, the budget status panel and report charts.

pub mod expense;
pub mod report;
pub mod status;

pub use expense::format_expense_table;
pub use report::{format_category_breakdown, format_daily_trend};
pub use status::format_budget_status;
