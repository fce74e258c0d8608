//! Monetary value types
//!
//! Balances and amounts are exact decimals. `Money` wraps `rust_decimal::Decimal`
//! so repeated deposits and withdrawals never accumulate binary floating-point
//! drift, and `InterestRate` is a validated non-negative ratio.

use super::error::AccountError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An exact decimal amount of currency
///
/// `Money` itself may hold a negative value (so that a caller-supplied amount
/// can be inspected and rejected), but no account ever stores a negative balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero currency units
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wrap an existing decimal value
    pub const fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Whole currency units, e.g. `Money::from_major(100)` is `100.00`
    pub fn from_major(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Minor units at the given scale, e.g. `Money::from_minor(10550, 2)` is `105.50`
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` exceeds 28, the maximum precision of `Decimal`.
    pub fn from_minor(minor: i64, scale: u32) -> Result<Self, rust_decimal::Error> {
        Decimal::try_new(minor, scale).map(Money)
    }

    /// The underlying decimal value
    pub const fn amount(self) -> Decimal {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtract two amounts, returning `None` on overflow
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiply by a rate, returning `None` on overflow
    pub fn checked_mul_rate(self, rate: InterestRate) -> Option<Money> {
        self.0.checked_mul(rate.0).map(Money)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A non-negative interest ratio, e.g. `0.05` for five percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct InterestRate(Decimal);

impl InterestRate {
    /// Validate and wrap a rate
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidInterestRate` if `rate` is negative.
    pub fn new(rate: Decimal) -> Result<Self, AccountError> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(AccountError::invalid_interest_rate(rate));
        }
        Ok(InterestRate(rate))
    }

    pub const fn ratio(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for InterestRate {
    type Error = AccountError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        InterestRate::new(rate)
    }
}

impl From<InterestRate> for Decimal {
    fn from(rate: InterestRate) -> Self {
        rate.0
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::whole(Money::from_major(100), "100.00")]
    #[case::cents(Money::from_minor(10550, 2).unwrap(), "105.50")]
    #[case::zero(Money::ZERO, "0.00")]
    #[case::four_places(Money::new(dec!(1.2345)), "1.23")]
    fn test_display_uses_two_places(#[case] money: Money, #[case] expected: &str) {
        assert_eq!(money.to_string(), expected);
    }

    #[rstest]
    #[case::cents(10550, 2, Some(dec!(105.50)))]
    #[case::max_scale(1, 28, Some(dec!(0.0000000000000000000000000001)))]
    #[case::scale_too_large(1, 29, None)]
    fn test_from_minor(#[case] minor: i64, #[case] scale: u32, #[case] expected: Option<Decimal>) {
        assert_eq!(Money::from_minor(minor, scale).ok().map(Money::amount), expected);
    }

    #[test]
    fn test_decimal_arithmetic_does_not_drift() {
        let mut total = Money::ZERO;
        for _ in 0..10 {
            total = total.checked_add(Money::new(dec!(0.1))).unwrap();
        }
        assert_eq!(total, Money::from_major(1));
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::from_major(1)), None);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let money: Money = " 42.50 ".parse().unwrap();
        assert_eq!(money, Money::new(dec!(42.50)));
        assert!("forty".parse::<Money>().is_err());
    }

    #[rstest]
    #[case::negative(Money::new(dec!(-0.01)), true)]
    #[case::zero(Money::ZERO, false)]
    #[case::negative_zero(Money::new(dec!(-0.00)), false)]
    #[case::positive(Money::from_major(1), false)]
    fn test_is_negative(#[case] money: Money, #[case] expected: bool) {
        assert_eq!(money.is_negative(), expected);
    }

    #[test]
    fn test_interest_rate_rejects_negative() {
        assert!(InterestRate::new(dec!(0.05)).is_ok());
        assert!(InterestRate::new(Decimal::ZERO).is_ok());
        assert!(matches!(
            InterestRate::new(dec!(-0.01)),
            Err(AccountError::InvalidInterestRate { .. })
        ));
    }

    #[test]
    fn test_checked_mul_rate() {
        let rate = InterestRate::new(dec!(0.05)).unwrap();
        let interest = Money::from_major(100).checked_mul_rate(rate).unwrap();
        assert_eq!(interest, Money::from_major(5));
    }

    #[test]
    fn test_serde_is_transparent() {
        let money: Money = serde_json::from_str("\"12.34\"").unwrap();
        assert_eq!(money, Money::new(dec!(12.34)));

        let rate: Result<InterestRate, _> = serde_json::from_str("\"-1\"");
        assert!(rate.is_err());
    }
}
