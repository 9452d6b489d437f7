//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense tracker.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, handle_status_command, BudgetCommands};
pub use expense::{
    handle_add_command, handle_categories_command, handle_list_command, AddArgs, ListArgs,
};
pub use report::{handle_report_command, ReportArgs};
