//! Daily spending trend
//!
//! Sums a month's expenses per calendar day for a line chart. Days without
//! spending are omitted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseRecord, Money};

/// Spending per day, in date order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTrend {
    pub points: Vec<(NaiveDate, Money)>,
}

impl DailyTrend {
    /// Group records by day; rejects records with negative amounts
    pub fn from_records<'a, I>(records: I) -> TrackerResult<Self>
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let mut by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();

        for record in records {
            if record.amount.is_negative() {
                return Err(TrackerError::Validation(format!(
                    "Cannot chart negative expense {}",
                    record
                )));
            }
            *by_day.entry(record.timestamp.date()).or_default() += record.amount;
        }

        Ok(Self {
            points: by_day.into_iter().collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest single-day total
    pub fn peak(&self) -> Option<Money> {
        self.points.iter().map(|(_, amount)| *amount).max()
    }
}
