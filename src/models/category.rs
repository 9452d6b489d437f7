//! Expense categories
//!
//! Categories are a fixed, closed set of labels. They are configuration-level
//! constants rather than user data, so they are modelled as an enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Housing,
            Self::Utilities,
            Self::Entertainment,
            Self::Shopping,
            Self::Healthcare,
            Self::Other,
        ]
    }

    /// The label stored on disk and shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    /// Parse a label, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned for a label outside the category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.label()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            labels.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_categories() {
        assert_eq!(ExpenseCategory::all().len(), 8);
        assert_eq!(ExpenseCategory::all()[0], ExpenseCategory::Food);
        assert_eq!(ExpenseCategory::all()[7], ExpenseCategory::Other);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Food));
        assert_eq!(
            " HealthCare ".parse::<ExpenseCategory>(),
            Ok(ExpenseCategory::Healthcare)
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Groceries".parse::<ExpenseCategory>().unwrap_err();
        assert!(err.to_string().contains("Unknown category 'Groceries'"));
        assert!("".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_label_round_trip() {
        for category in ExpenseCategory::all() {
            assert_eq!(category.label().parse::<ExpenseCategory>(), Ok(*category));
            assert_eq!(category.to_string(), category.label());
        }
    }
}
