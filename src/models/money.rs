//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest absolute decimal amount accepted from floating-point input
const MAX_DECIMAL: f64 = 90_000_000_000_000.0;

/// Largest absolute amount, in cents, accepted from any input
const MAX_CENTS: i64 = 9_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Convert a decimal amount (e.g. `12.5`) to Money, rounding to the nearest cent
    ///
    /// Rejects NaN, infinities and values too large to hold in cents.
    pub fn from_decimal(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite);
        }
        if value.abs() > MAX_DECIMAL {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self((value * 100.0).round() as i64))
    }

    /// Get the amount as a decimal number of currency units
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5".
    /// Extra decimal places round half away from zero, so "12.345" is 12.35.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, frac) = match rest.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|total| *total <= MAX_CENTS)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format as a plain decimal with two places (e.g. "10.50"), as stored on disk
    pub fn to_plain_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
    NotFinite,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
            MoneyParseError::NotFinite => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{:>8}", Money::from_cents(5)), "   $0.05");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(30000).to_plain_string(), "300.00");
        assert_eq!(Money::from_cents(-5).to_plain_string(), "-0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("300.0").unwrap().cents(), 30000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.é5").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
        assert_eq!(
            Money::parse("50000000000000000.00"),
            Err(MoneyParseError::OutOfRange("50000000000000000.00".into()))
        );
    }

    #[test]
    fn test_parse_rounds_to_cents() {
        assert_eq!(Money::parse("12.349").unwrap().cents(), 1235);
        assert_eq!(Money::parse("12.345").unwrap().cents(), 1235);
        assert_eq!(Money::parse("12.3449").unwrap().cents(), 1234);
        assert_eq!(Money::parse("0.009").unwrap().cents(), 1);
        assert_eq!(Money::parse("-0.005").unwrap().cents(), -1);
        assert_eq!(Money::parse("0.30000000000000004").unwrap().cents(), 30);
        assert_eq!(Money::parse("9.999").unwrap().cents(), 1000);
        assert_eq!(
            Money::parse("12.349").unwrap(),
            Money::from_decimal(12.349).unwrap()
        );
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!((big + Money::from_cents(10)).cents(), i64::MAX);

        let mut acc = Money::from_cents(i64::MIN + 1);
        acc -= Money::from_cents(10);
        assert_eq!(acc.cents(), i64::MIN);
        assert_eq!((-acc).cents(), i64::MAX);

        let total: Money = vec![Money::from_cents(i64::MAX); 3].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(12.5).unwrap().cents(), 1250);
        assert_eq!(Money::from_decimal(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_decimal(1000.0).unwrap().to_decimal(), 1000.0);
        assert_eq!(Money::from_decimal(f64::NAN), Err(MoneyParseError::NotFinite));
        assert_eq!(
            Money::from_decimal(f64::INFINITY),
            Err(MoneyParseError::NotFinite)
        );
        assert!(Money::from_decimal(1e20).is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }
}
