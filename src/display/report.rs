//! Report formatting utilities for terminal output
//!
//! Text renderings of the category breakdown and the daily trend, plus the
//! shared bar/percentage helpers.

use crate::reports::{CategoryBreakdown, DailyTrend};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

const BAR_WIDTH: usize = 24;

/// Render the category breakdown as labelled bars
pub fn format_category_breakdown(breakdown: &CategoryBreakdown, symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded for this month yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Expenses by Category\n");
    output.push_str(&separator(60));
    output.push('\n');

    for slice in &breakdown.slices {
        output.push_str(&format!(
            "{:<15} {} {:>6} {:>12}\n",
            slice.category,
            format_bar(slice.percentage, 100.0, BAR_WIDTH),
            format_percentage(slice.percentage),
            slice.amount.format_with_symbol(symbol),
        ));
    }

    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<15} {:>44}\n",
        "Total",
        breakdown.total.format_with_symbol(symbol)
    ));
    output
}

/// Render the daily trend, one bar per day scaled to the peak day
pub fn format_daily_trend(trend: &DailyTrend, symbol: &str) -> String {
    let Some(peak) = trend.peak() else {
        return "No expenses recorded for this month yet.\n".to_string();
    };

    let mut output = String::new();
    output.push_str("Daily Expenses Trend\n");
    output.push_str(&separator(50));
    output.push('\n');

    for (day, amount) in &trend.points {
        output.push_str(&format!(
            "{} {} {:>12}\n",
            day.format("%Y-%m-%d"),
            format_bar(amount.cents() as f64, peak.cents() as f64, BAR_WIDTH),
            amount.format_with_symbol(symbol),
        ));
    }
    output
}
