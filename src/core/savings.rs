//! Savings accounts with PIN-gated interest

use crate::config::SavingsConfig;
use crate::core::basic::BasicAccount;
use crate::core::traits::Account;
use crate::types::{AccountError, InterestRate, Money, Pin};
use std::fmt;

/// An account that accrues interest when the holder supplies the PIN
///
/// ```compile_fail
/// use rust_bank_accounts::{InterestRate, Pin, SavingsAccount};
///
/// let account = SavingsAccount::new(InterestRate::default(), Pin::new(1234));
/// let copy = account.clone();
/// ```
#[derive(Debug)]
pub struct SavingsAccount {
    base: BasicAccount,
    interest_rate: InterestRate,
    pin: Pin,
}

impl SavingsAccount {
    /// Open an account with a zero balance
    pub fn new(interest_rate: InterestRate, pin: Pin) -> Self {
        SavingsAccount {
            base: BasicAccount::new(),
            interest_rate,
            pin,
        }
    }

    /// Open an account from configured terms
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterestRate` if the configured rate is negative.
    pub fn from_config(config: SavingsConfig) -> Result<Self, AccountError> {
        let (interest_rate, pin) = config.into_terms()?;
        Ok(Self::new(interest_rate, pin))
    }

    pub fn interest_rate(&self) -> InterestRate {
        self.interest_rate
    }

    /// Credit `balance * interest_rate` to this account
    ///
    /// Interest is computed on the balance at call time. Returns the amount
    /// credited.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if `pin` does not match; the balance is unchanged
    /// - `ArithmeticOverflow` if the interest or new balance is out of range
    pub fn process_interest(&mut self, pin: Pin) -> Result<Money, AccountError> {
        if !self.pin.matches(pin) {
            tracing::warn!("interest processing refused: PIN mismatch");
            return Err(AccountError::unauthorized("process_interest"));
        }

        let interest = self
            .base
            .balance()
            .checked_mul_rate(self.interest_rate)
            .ok_or_else(|| AccountError::arithmetic_overflow("process_interest"))?;
        self.base.credit(interest, "process_interest")?;

        tracing::debug!(
            rate = %self.interest_rate,
            %interest,
            balance = %self.base.balance(),
            "credited interest"
        );
        Ok(interest)
    }
}

impl Account for SavingsAccount {
    fn balance(&self) -> Money {
        self.base.balance()
    }

    fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        self.base.deposit(amount)
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        self.base.withdraw(amount)
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Savings Balance: ${}", self.base.balance())
    }
}
