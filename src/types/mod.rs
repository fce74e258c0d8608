//! Types module
//!
//! Value types shared by every account variant:
//! - `money`: exact decimal amounts and interest rates
//! - `identity`: account numbers, check numbers and PINs
//! - `check`: the bearer check instrument
//! - `error`: error type for account operations

pub mod check;
pub mod error;
pub mod identity;
pub mod money;

pub use check::Check;
pub use error::AccountError;
pub use identity::{AccountNumber, CheckNumber, Pin};
pub use money::{InterestRate, Money};
