//! Identifiers and secrets attached to accounts and checks

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, unique identity of an account
///
/// Generated once when a checking account is opened and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(Uuid);

impl AccountNumber {
    /// Allocate a fresh random account number
    pub fn generate() -> Self {
        AccountNumber(Uuid::new_v4())
    }
}

impl From<Uuid> for AccountNumber {
    fn from(id: Uuid) -> Self {
        AccountNumber(id)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// Sequential number printed on a check
///
/// Numbers are allocated per issuing account, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckNumber(u32);

impl CheckNumber {
    pub const fn new(number: u32) -> Self {
        CheckNumber(number)
    }

    /// The number that follows this one, `None` after `u32::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(CheckNumber)
    }
}

impl fmt::Display for CheckNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Numeric PIN guarding interest processing on a savings account
///
/// The value never appears in `Debug` output, so accounts can be logged freely.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pin(u32);

impl Pin {
    pub const fn new(pin: u32) -> Self {
        Pin(pin)
    }

    /// Whether `candidate` is the same PIN
    pub fn matches(&self, candidate: Pin) -> bool {
        self.0 == candidate.0
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}
