//! Budget alert thresholds
//!
//! Severe at 90% or more, caution at 75% or more, otherwise on track.
//! Every user-facing surface applies these same cut-offs.

use std::fmt;

use crate::services::BudgetStatus;

/// Percentage at or above which the severe warning is shown
pub const SEVERE_THRESHOLD: f64 = 90.0;

/// Percentage at or above which the caution notice is shown
pub const CAUTION_THRESHOLD: f64 = 75.0;

/// Alert level derived from percentage of budget used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetAlert {
    Severe,
    Caution,
    OnTrack,
}

impl BudgetAlert {
    pub fn for_percentage(percentage_used: f64) -> Self {
        if percentage_used >= SEVERE_THRESHOLD {
            Self::Severe
        } else if percentage_used >= CAUTION_THRESHOLD {
            Self::Caution
        } else {
            Self::OnTrack
        }
    }

    pub fn for_status(status: &BudgetStatus) -> Self {
        Self::for_percentage(status.percentage_used)
    }

    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::Severe => "Warning: You've used 90% or more of your monthly budget!",
            Self::Caution => "Notice: You've used 75% of your monthly budget.",
            Self::OnTrack => "You're within your budget limits!",
        }
    }
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
