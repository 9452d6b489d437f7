//! Budget CLI commands
//!
//! Showing and setting the monthly budget, and the status panel.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_status;
use crate::error::TrackerResult;
use crate::models::Money;
use crate::tracker::ExpenseTracker;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the current monthly budget
    Show,

    /// Set the monthly budget
    Set {
        /// Amount (e.g., "1000" or "1000.00")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Show => {
            println!(
                "Monthly budget: {}",
                tracker.get_budget().format_with_symbol(symbol)
            );
        }
        BudgetCommands::Set { amount } => {
            let amount = Money::parse(&amount)?;
            tracker.set_budget(amount)?;
            println!(
                "Budget updated: {}",
                tracker.get_budget().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Handle `status`
pub fn handle_status_command(tracker: &ExpenseTracker, settings: &Settings) {
    let status = tracker.get_budget_status();
    print!(
        "{}",
        format_budget_status(
            &status,
            &tracker.current_period().friendly_name(),
            &settings.currency_symbol
        )
    );
}
