//! Category breakdown
//!
//! Proportional view of a category-to-total mapping, the input for a pie
//! chart. Only categories present in the mapping appear as slices.

use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseCategory, Money};
use crate::services::CategoryTotals;

/// One category's share of spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Share of the breakdown total, 0-100
    pub percentage: f64,
}

/// Spending split by category, largest slice first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub slices: Vec<CategorySlice>,
    pub total: Money,
}

impl CategoryBreakdown {
    /// Build from per-category totals; rejects negative totals
    pub fn from_totals(totals: &CategoryTotals) -> TrackerResult<Self> {
        if let Some((category, amount)) = totals.iter().find(|(_, amount)| amount.is_negative()) {
            return Err(TrackerError::Validation(format!(
                "Category '{}' has a negative total {}",
                category, amount
            )));
        }

        let total: Money = totals.values().sum();

        let mut slices: Vec<CategorySlice> = totals
            .iter()
            .map(|(&category, &amount)| CategorySlice {
                category,
                amount,
                percentage: if total.is_positive() {
                    amount.cents() as f64 * 100.0 / total.cents() as f64
                } else {
                    0.0
                },
            })
            .collect();

        // Stable sort keeps category order for equal amounts
        slices.sort_by(|a, b| b.amount.cmp(&a.amount));

        Ok(Self { slices, total })
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
