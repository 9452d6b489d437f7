//! Budget gauge
//!
//! A 0-100 gauge of percentage used, colored by band: safe below 50,
//! caution from 50 to 80, danger from 80. Values above 100 are kept as-is
//! and flagged as past the limit line.

use std::fmt;

use crate::error::{TrackerError, TrackerResult};

/// Top of the gauge axis and position of the limit line
pub const GAUGE_MAX: f64 = 100.0;

/// Threshold band of the gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeBand {
    Safe,
    Caution,
    Danger,
}

impl GaugeBand {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage < 50.0 {
            Self::Safe
        } else if percentage < 80.0 {
            Self::Caution
        } else {
            Self::Danger
        }
    }

    /// Lower and upper bound of the band on the gauge axis
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Safe => (0.0, 50.0),
            Self::Caution => (50.0, 80.0),
            Self::Danger => (80.0, GAUGE_MAX),
        }
    }
}

impl fmt::Display for GaugeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Danger => "danger",
        };
        f.pad(label)
    }
}

/// Gauge reading for a percentage of budget used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetGauge {
    pub value: f64,
    pub band: GaugeBand,
}

impl BudgetGauge {
    /// Build a gauge; rejects NaN, infinite and negative percentages
    pub fn new(percentage_used: f64) -> TrackerResult<Self> {
        if !percentage_used.is_finite() {
            return Err(TrackerError::Validation(format!(
                "Gauge value must be a finite number, got {}",
                percentage_used
            )));
        }
        if percentage_used < 0.0 {
            return Err(TrackerError::Validation(format!(
                "Gauge value cannot be negative, got {}",
                percentage_used
            )));
        }

        Ok(Self {
            value: percentage_used,
            band: GaugeBand::for_percentage(percentage_used),
        })
    }

    /// Whether the reading is past the 100% limit line
    pub fn exceeds_limit(&self) -> bool {
        self.value > GAUGE_MAX
    }

    /// Fraction of the axis to fill, clamped to 0..=1
    pub fn fill_ratio(&self) -> f64 {
        (self.value / GAUGE_MAX).clamp(0.0, 1.0)
    }
}
