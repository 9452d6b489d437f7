use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_categories_command, handle_list_command,
    handle_report_command, handle_status_command, AddArgs, BudgetCommands, ListArgs, ReportArgs,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::ExpenseTracker;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker with a monthly budget",
    long_about = "Record expenses, set a monthly budget and see how much of it \
                  this month's spending has used."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List this month's expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show spending against the monthly budget
    Status,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category breakdown and daily trend
    Report(ReportArgs),

    /// List the expense categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    if let Some(Commands::Config) = cli.command {
        settings.save(&paths)?;
        println!("Expense Tracker Configuration");
        println!("=============================");
        println!("Config file:  {}", paths.settings_file().display());
        println!("Ledger file:  {}", paths.expenses_file().display());
        println!("Budget file:  {}", paths.budget_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol:  {}", settings.currency_symbol);
        println!("  Date format:      {}", settings.datetime_format);
        println!("  Default budget:   {}", settings.default_monthly_budget);
        println!("  Lock timeout:     {} ms", settings.lock_timeout_ms);
        println!("  Log level:        {}", settings.log_level);
        return Ok(());
    }

    let mut tracker = ExpenseTracker::open(paths, &settings)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut tracker, &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&tracker, &settings, args)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut tracker, &settings, cmd)?,
        Some(Commands::Report(args)) => handle_report_command(&tracker, &settings, args)?,
        Some(Commands::Categories) => handle_categories_command(&tracker),
        Some(Commands::Status) | None => handle_status_command(&tracker, &settings),
        Some(Commands::Config) => {}
    }

    Ok(())
}
