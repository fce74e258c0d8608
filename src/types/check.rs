//! Paper checks
//!
//! A `Check` is a bearer instrument: once a checking account issues it, the
//! value is owned by whoever holds it and may be deposited into any checking
//! account. The funds were already withdrawn from the issuer when the check was
//! written, so the only state a check carries is whether it has been cashed.
//!
//! ```text
//! issued ──deposit──▶ cashed (terminal)
//! ```

use super::identity::{AccountNumber, CheckNumber};
use super::money::Money;

/// A single-use claim on funds already debited from the issuing account
///
/// Checks cannot be constructed outside this crate; `CheckingAccount::write_check`
/// is the only way to obtain one.
#[derive(Debug, PartialEq, Eq)]
pub struct Check {
    number: CheckNumber,
    amount: Money,
    issuer: AccountNumber,
    cashed: bool,
}

impl Check {
    pub(crate) fn new(number: CheckNumber, amount: Money, issuer: AccountNumber) -> Self {
        Check {
            number,
            amount,
            issuer,
            cashed: false,
        }
    }

    pub fn number(&self) -> CheckNumber {
        self.number
    }

    /// Face value of the check, fixed when it was written
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Account that wrote (and was debited for) this check
    pub fn issuer(&self) -> AccountNumber {
        self.issuer
    }

    pub fn is_cashed(&self) -> bool {
        self.cashed
    }

    /// Move the check to its terminal state
    ///
    /// Setting the flag twice has no further effect. Whoever calls this is
    /// responsible for crediting the amount at most once.
    pub(crate) fn cash(&mut self) {
        self.cashed = true;
    }
}
