//! Thread-safe account registry
//!
//! This module provides `AccountRegistry`, which owns accounts behind a
//! `DashMap` so they can be shared between threads.
//!
//! # Design
//!
//! Each account is its own unit of mutual exclusion. Every mutation goes
//! through `update`, which holds the account's map entry for the duration of
//! the closure, so deposits, withdrawals, check writes, check redemptions and
//! interest runs on one account are serialized while different accounts
//! proceed in parallel.
//!
//! # Thread Safety
//!
//! A check is redeemed under the registry entry lock of the depositing account
//! and the holder's exclusive borrow of the check, so two threads racing to
//! deposit the same check (behind whatever lock the holder uses) credit it
//! exactly once.

use crate::core::checking::CheckingAccount;
use crate::core::traits::Account;
use crate::types::{AccountError, AccountNumber, Check, Money};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Concurrent map from account number to account
#[derive(Debug)]
pub struct AccountRegistry<A> {
    accounts: DashMap<AccountNumber, A>,
}

impl<A> AccountRegistry<A> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Register `account` under `number`
    ///
    /// # Errors
    ///
    /// Returns `AccountAlreadyRegistered` if `number` is taken; the registered
    /// account is kept and `account` is dropped.
    pub fn insert(&self, number: AccountNumber, account: A) -> Result<(), AccountError> {
        match self.accounts.entry(number) {
            Entry::Occupied(_) => {
                tracing::warn!(account = %number, "account number already registered");
                Err(AccountError::account_already_registered(number))
            }
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.accounts.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Snapshot of registered account numbers, in arbitrary order
    pub fn numbers(&self) -> Vec<AccountNumber> {
        self.accounts.iter().map(|entry| *entry.key()).collect()
    }

    /// Run `f` with exclusive access to one account
    ///
    /// No other thread can read or modify the account while `f` runs.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account is registered under `number`,
    /// otherwise whatever `f` returns.
    pub fn update<F, R>(&self, number: AccountNumber, f: F) -> Result<R, AccountError>
    where
        F: FnOnce(&mut A) -> Result<R, AccountError>,
    {
        let mut entry = self
            .accounts
            .get_mut(&number)
            .ok_or_else(|| AccountError::account_not_found(number))?;
        f(entry.value_mut())
    }
}

impl<A: Account> AccountRegistry<A> {
    /// Current balance of one account
    pub fn balance(&self, number: AccountNumber) -> Result<Money, AccountError> {
        self.accounts
            .get(&number)
            .map(|entry| entry.value().balance())
            .ok_or_else(|| AccountError::account_not_found(number))
    }

    pub fn deposit(&self, number: AccountNumber, amount: Money) -> Result<(), AccountError> {
        self.update(number, |account| account.deposit(amount))
    }

    pub fn withdraw(&self, number: AccountNumber, amount: Money) -> Result<(), AccountError> {
        self.update(number, |account| account.withdraw(amount))
    }
}

impl AccountRegistry<CheckingAccount> {
    /// Register a checking account under its own number
    ///
    /// Checks written by the account name this number as their issuer, so it
    /// is the only key a checking account is ever stored under.
    ///
    /// # Errors
    ///
    /// Returns `AccountAlreadyRegistered` if the number is taken.
    pub fn open(&self, account: CheckingAccount) -> Result<AccountNumber, AccountError> {
        let number = account.number();
        self.insert(number, account)?;
        Ok(number)
    }

    pub fn write_check(&self, number: AccountNumber, amount: Money) -> Result<Check, AccountError> {
        self.update(number, |account| account.write_check(amount))
    }

    pub fn deposit_check(
        &self,
        number: AccountNumber,
        check: &mut Check,
    ) -> Result<(), AccountError> {
        self.update(number, |account| account.deposit_check(check))
    }
}

impl<A> Default for AccountRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}
