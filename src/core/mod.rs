//! Core account behaviour
//!
//! - `traits` - The `Account` capability shared by every variant
//! - `basic` - Plain balance-holding account
//! - `checking` - Accounts that write and redeem checks
//! - `savings` - Accounts with PIN-gated interest
//! - `registry` - Concurrent, per-account serialized access to many accounts

pub mod basic;
pub mod checking;
pub mod registry;
pub mod savings;
pub mod traits;

pub use basic::BasicAccount;
pub use checking::CheckingAccount;
pub use registry::AccountRegistry;
pub use savings::SavingsAccount;
pub use traits::Account;
