//! The account capability shared by every account variant
//!
//! Basic, checking and savings accounts all hold a balance and accept deposits
//! and withdrawals. Code that only needs those operations works against
//! `dyn Account` or a generic `A: Account` and never sees the variant.

use crate::types::{AccountError, Money};

/// Read a balance, deposit into it, withdraw from it
///
/// Implementations are the sole authority over their balance: it is never
/// negative and changes only through these operations (and the variant's own).
pub trait Account {
    /// Current balance, always `>= 0`
    fn balance(&self) -> Money;

    /// Credit `amount` to the balance
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative
    /// - `ArithmeticOverflow` if the new balance is out of range
    fn deposit(&mut self, amount: Money) -> Result<(), AccountError>;

    /// Debit `amount`, flooring the balance at zero
    ///
    /// Withdrawing more than the balance empties the account and is not an
    /// error; callers cannot tell a clamped withdrawal from a full one.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative
    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError>;
}
