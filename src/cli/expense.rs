//! Expense CLI commands
//!
//! Recording expenses, listing them and showing the category set.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::TrackerResult;
use crate::models::{ExpenseCategory, ExpenseRecord, Money, MonthPeriod};
use crate::tracker::ExpenseTracker;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "12.50" or "$12.50")
    pub amount: String,
    /// Category (Food, Transportation, Housing, Utilities, Entertainment,
    /// Shopping, Healthcare, Other)
    pub category: String,
    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Month to list (YYYY-MM, defaults to the current month)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Maximum number of rows to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `add`
pub fn handle_add_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let amount = Money::parse(&args.amount)?;
    let category: ExpenseCategory = args.category.parse()?;

    let record = tracker.add_expense(amount, category, args.description)?;

    println!(
        "Expense added: {} {} on {}",
        record.amount.format_with_symbol(&settings.currency_symbol),
        record.category,
        record.timestamp.format(&settings.datetime_format)
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: ListArgs,
) -> TrackerResult<()> {
    let period = match args.month.as_deref() {
        Some(month) => MonthPeriod::parse(month)?,
        None => tracker.current_period(),
    };

    let mut expenses: Vec<&ExpenseRecord> = tracker.expenses_in(period).collect();
    expenses.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    if let Some(limit) = args.limit {
        expenses.truncate(limit);
    }

    println!("Expenses: {}", period.friendly_name());
    println!();
    print!(
        "{}",
        format_expense_table(&expenses, &settings.currency_symbol, &settings.datetime_format)
    );
    Ok(())
}

/// Handle `categories`
pub fn handle_categories_command(tracker: &ExpenseTracker) {
    for category in tracker.categories() {
        println!("{}", category);
    }
}
