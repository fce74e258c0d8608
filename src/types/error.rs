//! Error types for account operations
//!
//! Every operation that can be refused reports why through `AccountError`.
//! State is never modified when an error is returned.
//!
//! # Error Categories
//!
//! - **Funds**: a check was requested for more than the balance allows
//! - **Check lifecycle**: a check was deposited after it had been cashed, or
//!   an account ran out of check numbers
//! - **Authorization**: the PIN supplied for interest processing did not match
//! - **Validation**: negative amounts or interest rates
//! - **Arithmetic**: overflow while crediting a balance
//! - **Registry**: an account number unknown to, or already taken in, a registry
//!
//! Withdrawals never fail for lack of funds; they floor the balance at zero.

use super::identity::{AccountNumber, CheckNumber};
use super::money::Money;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for account operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Balance does not strictly exceed the requested check amount
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account asked to write the check
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Money,
        /// Face value requested
        requested: Money,
    },

    /// The check was already redeemed
    #[error("Check {check} from account {issuer} has already been cashed")]
    AlreadyCashed {
        /// Number printed on the check
        check: CheckNumber,
        /// Account that wrote the check
        issuer: AccountNumber,
    },

    /// The supplied PIN did not match
    #[error("Unauthorized {operation}: PIN mismatch")]
    Unauthorized {
        /// Operation that was refused
        operation: String,
    },

    /// Negative amounts cannot be deposited, withdrawn or written on a check
    #[error("Invalid amount {amount} for {operation}")]
    InvalidAmount {
        /// The rejected amount
        amount: Money,
        /// Operation that was refused
        operation: String,
    },

    /// Interest rates must be non-negative
    #[error("Invalid interest rate {rate}")]
    InvalidInterestRate {
        /// The rejected ratio
        rate: Decimal,
    },

    /// Crediting the balance would exceed the range of `Decimal`
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// No account is registered under this number
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The number that was looked up
        account: AccountNumber,
    },

    /// Another account is already registered under this number
    #[error("Account {account} is already registered")]
    AccountAlreadyRegistered {
        /// The occupied number
        account: AccountNumber,
    },

    /// Every check number has been used
    #[error("Account {account} has no check numbers left")]
    CheckNumbersExhausted {
        /// Account attempting to write a check
        account: AccountNumber,
    },

    /// The issued-check list already holds this number
    #[error("Check {check} was already issued by account {account}")]
    DuplicateCheckNumber {
        /// Number that would have been reused
        check: CheckNumber,
        /// Account attempting to issue it
        account: AccountNumber,
    },
}

// Helper functions for creating common errors

impl AccountError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Money, requested: Money) -> Self {
        AccountError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an AlreadyCashed error
    pub fn already_cashed(check: CheckNumber, issuer: AccountNumber) -> Self {
        AccountError::AlreadyCashed { check, issuer }
    }

    /// Create an Unauthorized error
    pub fn unauthorized(operation: &str) -> Self {
        AccountError::Unauthorized {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Money, operation: &str) -> Self {
        AccountError::InvalidAmount {
            amount,
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidInterestRate error
    pub fn invalid_interest_rate(rate: Decimal) -> Self {
        AccountError::InvalidInterestRate { rate }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        AccountError::AccountNotFound { account }
    }

    /// Create an AccountAlreadyRegistered error
    pub fn account_already_registered(account: AccountNumber) -> Self {
        AccountError::AccountAlreadyRegistered { account }
    }

    /// Create a CheckNumbersExhausted error
    pub fn check_numbers_exhausted(account: AccountNumber) -> Self {
        AccountError::CheckNumbersExhausted { account }
    }

    /// Create a DuplicateCheckNumber error
    pub fn duplicate_check_number(check: CheckNumber, account: AccountNumber) -> Self {
        AccountError::DuplicateCheckNumber { check, account }
    }
}
