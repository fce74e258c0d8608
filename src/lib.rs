//! Rust Bank Accounts Library
//! # Overview
//!
//! This library models a small family of bank accounts with exact decimal
//! balances: a basic account, a checking account that writes and redeems paper
//! checks, and a savings account that accrues interest behind a PIN.
//!
//! # Architecture
//!
//! - [`types`] - Value types (Money, Check, identifiers, errors)
//! - [`core`] - Account behaviour:
//!   - [`core::traits`] - The [`Account`] capability
//!   - [`core::basic`] - [`BasicAccount`]
//!   - [`core::checking`] - [`CheckingAccount`] and the check protocol
//!   - [`core::savings`] - [`SavingsAccount`] and interest processing
//!   - [`core::registry`] - [`AccountRegistry`] for concurrent use
//! - [`config`] - Account and savings configuration
//!
//! # Invariants
//!
//! - A balance is never negative. Withdrawing more than the balance empties
//!   the account instead of failing.
//! - A check can only be written for less than the current balance, and is
//!   debited from the issuer when written.
//! - A check credits a balance at most once, whichever account deposits it.
//! - Interest is credited only when the caller supplies the account's PIN.
//!
//! # Example
//!
//! ```
//! use rust_bank_accounts::{Account, CheckingAccount, Money};
//!
//! let mut alice = CheckingAccount::new();
//! let mut bob = CheckingAccount::new();
//! alice.deposit(Money::from_major(100)).unwrap();
//!
//! let mut check = alice.write_check(Money::from_major(20)).unwrap();
//! bob.deposit_check(&mut check).unwrap();
//!
//! assert_eq!(alice.balance(), Money::from_major(80));
//! assert_eq!(bob.balance(), Money::from_major(20));
//! assert!(bob.deposit_check(&mut check).is_err());
//! ```

// Module declarations
pub mod config;
pub mod core;
pub mod types;

pub use config::{AccountConfig, SavingsConfig};
pub use crate::core::{Account, AccountRegistry, BasicAccount, CheckingAccount, SavingsAccount};
pub use types::{AccountError, AccountNumber, Check, CheckNumber, InterestRate, Money, Pin};
