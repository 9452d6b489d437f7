//! Service layer for the expense tracker
//!
//! Derivation rules on top of the stored records: totals, category
//! breakdowns and budget status.

pub mod summary;

pub use summary::{BudgetStatus, CategoryTotals};
