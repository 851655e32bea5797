//! Money type for representing currency amounts
//!
//! Amounts are exact decimals. Splitting a shared expense in half never
//! loses precision; rounding only happens when an amount is formatted for
//! display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Largest income or expense amount accepted, in whole units
///
/// Keeps every possible total far inside `Decimal`'s range.
pub const MAX_UNITS: i64 = 1_000_000_000_000;

/// Represents a monetary amount in the single tracked currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money amount from whole units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Wrap an existing decimal
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Exactly half of this amount
    pub fn half(&self) -> Self {
        Self(self.0 / Decimal::TWO)
    }

    /// The largest amount a single income or expense may hold
    pub fn max_amount() -> Self {
        Self::from_units(MAX_UNITS)
    }

    /// Check the amount against [`Money::max_amount`]
    pub fn is_within_limit(&self) -> bool {
        self.abs() <= Self::max_amount()
    }

    /// Addition that reports overflow instead of panicking
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtraction that reports overflow instead of panicking
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Addition clamped to the representable range
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtraction clamped to the representable range
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Round to two fraction digits, midpoints away from zero
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts an optional sign, digits, and a single `.` or `,` decimal
    /// separator: "10.50", "-3", "12,5", ".75". Anything else (letters,
    /// exponents, grouping characters, empty input) is rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let unsigned = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);

        let mut seen_separator = false;
        let mut seen_digit = false;
        for c in unsigned.chars() {
            match c {
                '0'..='9' => seen_digit = true,
                '.' | ',' if !seen_separator => seen_separator = true,
                _ => return Err(invalid()),
            }
        }
        if !seen_digit {
            return Err(invalid());
        }

        let mut body = unsigned.replace(',', ".");
        if body.ends_with('.') {
            body.pop();
        }
        if body.starts_with('.') {
            body.insert(0, '0');
        }

        let value = Decimal::from_str(&body).map_err(|_| invalid())?;
        if trimmed.starts_with('-') {
            Ok(Self(-value))
        } else {
            Ok(Self(value))
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
        write!(f, "{:.2}", self.rounded())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {:?}", s),
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
        assert_eq!(m, Money::parse("10.50").unwrap());
        assert_eq!(m.to_string(), "10.50");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_units(2000).to_string(), "2000.00");
    }

    #[test]
    fn test_half_is_exact() {
        let m = Money::from_cents(1);
        let half = m.half();
        assert_eq!(half + half, m);
        assert_eq!(half.as_decimal(), Decimal::new(5, 3));
    }

    #[test]
    fn test_rounding_only_at_display() {
        // 0.005 rounds away from zero when shown
        assert_eq!(Money::from_cents(1).half().to_string(), "0.01");
        assert_eq!((-Money::from_cents(1).half()).to_string(), "-0.01");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(-a, Money::from_cents(-1000));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse(" 10,5 ").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("+3").unwrap(), Money::from_units(3));
        assert_eq!(Money::parse("10").unwrap(), Money::from_units(10));
        assert_eq!(Money::parse(".75").unwrap(), Money::from_cents(75));
        assert_eq!(Money::parse("12.").unwrap(), Money::from_units(12));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "   ", "abc", "12abc", "1.2.3", "1e5", "NaN", "inf", "-", ".", "1 000"] {
            assert!(Money::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_cents(600));
    }

    #[test]
    fn test_sum_at_decimal_max_does_not_panic() {
        let huge = Money::parse("79228162514264337593543950335").unwrap();
        assert!(!huge.is_within_limit());

        assert_eq!(huge.checked_add(huge), None);
        assert_eq!(Money::from_units(1).checked_sub(Money::from_units(3)), Some(Money::from_units(-2)));

        let total: Money = [huge, huge].into_iter().sum();
        assert_eq!(total, huge);
        assert!((-huge).saturating_sub(huge).is_negative());
    }

    #[test]
    fn test_limit() {
        assert!(Money::max_amount().is_within_limit());
        assert!(!(Money::max_amount() + Money::from_cents(1)).is_within_limit());
        assert!(Money::from_cents(-5).is_within_limit());
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let from_number: Money = serde_json::from_str("40.5").unwrap();
        let from_string: Money = serde_json::from_str("\"40.50\"").unwrap();
        assert_eq!(from_number, Money::from_cents(4050));
        assert_eq!(from_number, from_string);
    }
}
