//! Report builders for presentation layers
//!
//! Turns engine outputs into the inputs that charts and alerts need:
//! a proportional category breakdown, a threshold-banded budget gauge, a
//! per-day spending trend and the budget alert level. Builders reject
//! malformed input with a `Validation` error; they never touch engine state.

pub mod alert;
pub mod category;
pub mod gauge;
pub mod trend;

pub use alert::BudgetAlert;
pub use category::{CategoryBreakdown, CategorySlice};
pub use gauge::{BudgetGauge, GaugeBand};
pub use trend::DailyTrend;
