//! Expense display formatting
//!
//! Formats expense records as a table for terminal output.

use crate::models::ExpenseRecord;

use super::report::truncate;

/// Format expenses as a table, newest first
///
/// `datetime_format` is a strftime pattern for the date column.
pub fn format_expense_table(
    expenses: &[&ExpenseRecord],
    symbol: &str,
    datetime_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded for this month yet.\n".to_string();
    }

    let mut sorted: Vec<&ExpenseRecord> = expenses.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let dates: Vec<String> = sorted
        .iter()
        .map(|e| e.timestamp.format(datetime_format).to_string())
        .collect();
    let date_width = dates.iter().map(|d| d.chars().count()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<date_width$}  {:<15} {:>12}  {}\n",
        "Date",
        "Category",
        "Amount",
        "Description",
        date_width = date_width,
    ));
    output.push_str(&format!(
        "{:-<date_width$}  {:-<15} {:->12}  {:-<20}\n",
        "",
        "",
        "",
        "",
        date_width = date_width,
    ));

    for (expense, date) in sorted.iter().zip(&dates) {
        output.push_str(&format!(
            "{:<date_width$}  {:<15} {:>12}  {}\n",
            date,
            expense.category,
            expense.amount.format_with_symbol(symbol),
            truncate(&expense.description, 40),
            date_width = date_width,
        ));
    }

    output
}
