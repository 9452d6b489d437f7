//! Report CLI command
//!
//! Category breakdown and daily trend for one month, as text or JSON.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::{format_category_breakdown, format_daily_trend};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseCategory, MonthPeriod};
use crate::reports::{CategoryBreakdown, DailyTrend};
use crate::services::summary;
use crate::tracker::ExpenseTracker;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Month to report on (YYYY-MM, defaults to the current month)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of `report --json`; amounts are decimal currency units
#[derive(Debug, Serialize)]
struct MonthReport {
    month: String,
    total: f64,
    categories: Vec<CategoryEntry>,
    daily: Vec<DailyEntry>,
}

#[derive(Debug, Serialize)]
struct CategoryEntry {
    category: ExpenseCategory,
    amount: f64,
    percentage: f64,
}

#[derive(Debug, Serialize)]
struct DailyEntry {
    date: NaiveDate,
    amount: f64,
}

impl MonthReport {
    fn new(period: MonthPeriod, categories: &CategoryBreakdown, daily: &DailyTrend) -> Self {
        Self {
            month: period.to_string(),
            total: categories.total.to_decimal(),
            categories: categories
                .slices
                .iter()
                .map(|slice| CategoryEntry {
                    category: slice.category,
                    amount: slice.amount.to_decimal(),
                    percentage: slice.percentage,
                })
                .collect(),
            daily: daily
                .points
                .iter()
                .map(|(date, amount)| DailyEntry {
                    date: *date,
                    amount: amount.to_decimal(),
                })
                .collect(),
        }
    }
}

/// Handle `report`
pub fn handle_report_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: ReportArgs,
) -> TrackerResult<()> {
    let period = match args.month.as_deref() {
        Some(month) => MonthPeriod::parse(month)?,
        None => tracker.current_period(),
    };

    let categories =
        CategoryBreakdown::from_totals(&summary::category_totals(tracker.expenses_in(period)))?;
    let daily = DailyTrend::from_records(tracker.expenses_in(period))?;

    if args.json {
        let report = MonthReport::new(period, &categories, &daily);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| TrackerError::Persistence(format!("Failed to serialize report: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    let symbol = &settings.currency_symbol;
    println!("Report: {}", period.friendly_name());
    println!();
    print!("{}", format_category_breakdown(&categories, symbol));
    println!();
    print!("{}", format_daily_trend(&daily, symbol));
    Ok(())
}
