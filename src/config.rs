//! Account configuration
//!
//! Settings are plain serde structs so they can be loaded from whatever format
//! the embedding application uses. Invalid values are either repaired with a
//! warning (`AccountConfig`) or rejected (`SavingsConfig`), since a bad interest
//! rate or PIN cannot be guessed.

use crate::types::{AccountError, CheckNumber, InterestRate, Pin};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Settings for opening checking accounts
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Record every issued check number so `inspect_for_fraud` can find it
    ///
    /// With `false` the issued list is never populated and fraud inspection
    /// always reports nothing.
    pub track_issued_checks: bool,
    /// Number printed on the first check an account writes
    pub first_check_number: u32,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            track_issued_checks: true,
            first_check_number: 1,
        }
    }
}

impl AccountConfig {
    /// Create a new AccountConfig with custom values
    ///
    /// A `first_check_number` of zero is replaced by the default.
    pub fn new(track_issued_checks: bool, first_check_number: u32) -> Self {
        Self {
            track_issued_checks,
            first_check_number,
        }
        .validated()
    }

    /// Replace invalid values with defaults, logging each replacement
    pub fn validated(self) -> Self {
        let default = Self::default();

        let first_check_number = if self.first_check_number == 0 {
            tracing::warn!(
                "Invalid first_check_number ({}), using default ({})",
                self.first_check_number,
                default.first_check_number
            );
            default.first_check_number
        } else {
            self.first_check_number
        };

        Self {
            track_issued_checks: self.track_issued_checks,
            first_check_number,
        }
    }

    pub fn first_check(&self) -> CheckNumber {
        CheckNumber::new(self.first_check_number)
    }
}

/// Terms for opening a savings account
#[derive(Clone, Deserialize)]
pub struct SavingsConfig {
    /// Ratio credited per interest run, e.g. `0.05`
    pub interest_rate: Decimal,
    /// Numeric PIN required to run interest
    pub pin: u32,
}

impl SavingsConfig {
    pub fn new(interest_rate: Decimal, pin: u32) -> Self {
        Self { interest_rate, pin }
    }

    /// Validate the terms
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidInterestRate` for a negative rate.
    pub fn into_terms(self) -> Result<(InterestRate, Pin), AccountError> {
        let rate = InterestRate::new(self.interest_rate)?;
        Ok((rate, Pin::new(self.pin)))
    }
}

impl std::fmt::Debug for SavingsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavingsConfig")
            .field("interest_rate", &self.interest_rate)
            .field("pin", &Pin::new(self.pin))
            .finish()
    }
}
