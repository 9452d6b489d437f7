//! Budget status panel
//!
//! Renders total, budget, remaining, the gauge and the alert message.

use crate::reports::{BudgetAlert, BudgetGauge};
use crate::services::BudgetStatus;

use super::report::{format_bar, format_percentage, separator};

const GAUGE_WIDTH: usize = 30;

/// Render the gauge as a bar with its band label
pub fn format_gauge(gauge: &BudgetGauge) -> String {
    let limit = if gauge.exceeds_limit() { " (over limit)" } else { "" };
    format!(
        "[{}] {} {}{}",
        format_bar(gauge.fill_ratio(), 1.0, GAUGE_WIDTH),
        format_percentage(gauge.value),
        gauge.band,
        limit
    )
}

/// Render the status panel
///
/// A gauge that cannot be built (non-finite percentage) is omitted.
pub fn format_budget_status(status: &BudgetStatus, period_name: &str, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget Status: {}\n", period_name));
    output.push_str(&separator(50));
    output.push('\n');
    output.push_str(&format!(
        "{:<12} {:>14}\n",
        "Total Spent",
        status.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<12} {:>14}\n",
        "Budget",
        status.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<12} {:>14}\n",
        "Remaining",
        status.remaining.format_with_symbol(symbol)
    ));

    if let Ok(gauge) = BudgetGauge::new(status.percentage_used) {
        output.push('\n');
        output.push_str(&format_gauge(&gauge));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(BudgetAlert::for_status(status).message());
    output.push('\n');
    output
}
