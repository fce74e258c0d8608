//! Basic balance-holding account
//!
//! `BasicAccount` is the minimal `Account`: a balance that starts at zero.
//! Checking and savings accounts embed one and delegate their plain deposits
//! and withdrawals to it.

use crate::core::traits::Account;
use crate::types::{AccountError, Money};
use std::fmt;

/// A balance with deposit and floor-at-zero withdrawal
///
/// Accounts are not `Clone`: a copy would be a second authority over the
/// same funds.
///
/// ```compile_fail
/// use rust_bank_accounts::BasicAccount;
///
/// let account = BasicAccount::new();
/// let copy = account.clone();
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BasicAccount {
    balance: Money,
}

impl BasicAccount {
    /// Create an account with a zero balance
    pub fn new() -> Self {
        BasicAccount {
            balance: Money::ZERO,
        }
    }

    /// Shared credit path used by every variant
    ///
    /// `operation` names the caller in errors and logs.
    pub(crate) fn credit(&mut self, amount: Money, operation: &str) -> Result<(), AccountError> {
        if amount.is_negative() {
            tracing::warn!(%amount, operation, "rejected negative amount");
            return Err(AccountError::invalid_amount(amount, operation));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow(operation))?;

        self.balance = new_balance;
        tracing::debug!(%amount, balance = %self.balance, operation, "credited");
        Ok(())
    }

    /// Shared debit path used by every variant
    pub(crate) fn debit(&mut self, amount: Money, operation: &str) -> Result<(), AccountError> {
        if amount.is_negative() {
            tracing::warn!(%amount, operation, "rejected negative amount");
            return Err(AccountError::invalid_amount(amount, operation));
        }

        if amount <= self.balance {
            self.balance = self
                .balance
                .checked_sub(amount)
                .ok_or_else(|| AccountError::arithmetic_overflow(operation))?;
        } else {
            tracing::debug!(
                %amount,
                balance = %self.balance,
                operation,
                "withdrawal exceeds balance, flooring at zero"
            );
            self.balance = Money::ZERO;
        }

        tracing::debug!(%amount, balance = %self.balance, operation, "debited");
        Ok(())
    }
}

impl Account for BasicAccount {
    fn balance(&self) -> Money {
        self.balance
    }

    fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        self.credit(amount, "deposit")
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        self.debit(amount, "withdraw")
    }
}

impl fmt::Display for BasicAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Balance: ${}", self.balance)
    }
}
