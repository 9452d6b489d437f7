//! Aggregation over expense records
//!
//! Pure folds that turn a sequence of records into totals, per-category
//! sums and budget status. Callers choose which records to pass (normally
//! the current month).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ExpenseCategory, ExpenseRecord, Money};

/// Per-category sums. Categories without records are absent, not zero.
pub type CategoryTotals = BTreeMap<ExpenseCategory, Money>;

/// Sum of amounts; zero for an empty sequence
pub fn total<'a, I>(records: I) -> Money
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    records.into_iter().map(|r| r.amount).sum()
}

/// Group records by category and sum each group
pub fn category_totals<'a, I>(records: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    records
        .into_iter()
        .fold(CategoryTotals::new(), |mut totals, record| {
            *totals.entry(record.category).or_default() += record.amount;
            totals
        })
}

/// Total as a percentage of budget; 0 when the budget is 0
pub fn percentage_used(total: Money, budget: Money) -> f64 {
    if budget.is_positive() {
        (total.cents() as f64 * 100.0) / budget.cents() as f64
    } else {
        0.0
    }
}

/// Spending against the monthly budget at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub total: Money,
    pub budget: Money,
    /// Negative when overspent
    pub remaining: Money,
    pub percentage_used: f64,
}

impl BudgetStatus {
    pub fn compute(total: Money, budget: Money) -> Self {
        Self {
            total,
            budget,
            remaining: budget - total,
            percentage_used: percentage_used(total, budget),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}
