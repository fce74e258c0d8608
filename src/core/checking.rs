//! Checking accounts and the check protocol
//!
//! A checking account is a `BasicAccount` with an identity and a checkbook.
//! Writing a check is authorize-then-debit in one call: the balance must
//! strictly exceed the amount, and only then is the amount withdrawn and a
//! `Check` handed out. Since withdrawals never fail, the funds check has to
//! happen before the debit.
//!
//! Redemption is the other half. `deposit_check` may run on any checking
//! account, credits the face value and marks the check cashed; a cashed check
//! is refused without touching the balance.

use crate::config::AccountConfig;
use crate::core::basic::BasicAccount;
use crate::core::traits::Account;
use crate::types::{AccountError, AccountNumber, Check, CheckNumber, Money};
use std::collections::BTreeSet;
use std::fmt;

/// An account that can write and redeem checks
///
/// The account number is unique, so a checking account cannot be copied;
/// a copy would issue checks under the same number from a second balance.
///
/// ```compile_fail
/// use rust_bank_accounts::CheckingAccount;
///
/// let account = CheckingAccount::new();
/// let copy = account.clone();
/// ```
#[derive(Debug)]
pub struct CheckingAccount {
    base: BasicAccount,
    number: AccountNumber,
    /// Numbers of checks written by this account
    issued_checks: BTreeSet<CheckNumber>,
    /// Number the next written check will carry, `None` once exhausted
    current_check: Option<CheckNumber>,
    track_issued_checks: bool,
}

impl CheckingAccount {
    /// Open an account with a zero balance and the default configuration
    pub fn new() -> Self {
        Self::with_config(&AccountConfig::default())
    }

    /// Open an account with a zero balance
    pub fn with_config(config: &AccountConfig) -> Self {
        let config = config.clone().validated();
        let account = CheckingAccount {
            base: BasicAccount::new(),
            number: AccountNumber::generate(),
            issued_checks: BTreeSet::new(),
            current_check: Some(config.first_check()),
            track_issued_checks: config.track_issued_checks,
        };
        tracing::debug!(account = %account.number, "opened checking account");
        account
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// Check numbers this account has recorded as issued, ascending
    pub fn issued_checks(&self) -> impl Iterator<Item = CheckNumber> + '_ {
        self.issued_checks.iter().copied()
    }

    /// Whether `check_number` is already on record as issued by this account
    ///
    /// Always `false` when issued-check tracking is disabled.
    pub fn inspect_for_fraud(&self, check_number: CheckNumber) -> bool {
        self.issued_checks.contains(&check_number)
    }

    /// Write a check for `amount`, debiting this account immediately
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative
    /// - `InsufficientFunds` unless the balance strictly exceeds `amount`
    /// - `DuplicateCheckNumber` if the next number is already on record
    /// - `CheckNumbersExhausted` once the last check number has been used
    ///
    /// The account is unchanged on every error.
    pub fn write_check(&mut self, amount: Money) -> Result<Check, AccountError> {
        if amount.is_negative() {
            tracing::warn!(account = %self.number, %amount, "rejected negative check amount");
            return Err(AccountError::invalid_amount(amount, "write_check"));
        }

        let balance = self.base.balance();
        if balance <= amount {
            tracing::warn!(
                account = %self.number,
                %balance,
                %amount,
                "insufficient funds to write check"
            );
            return Err(AccountError::insufficient_funds(self.number, balance, amount));
        }

        let check_number = self.next_number()?;
        if self.inspect_for_fraud(check_number) {
            tracing::warn!(
                account = %self.number,
                check = %check_number,
                "check number already issued"
            );
            return Err(AccountError::duplicate_check_number(check_number, self.number));
        }

        self.base.debit(amount, "write_check")?;
        self.current_check = check_number.next();
        if self.track_issued_checks {
            self.issued_checks.insert(check_number);
        }

        tracing::debug!(
            account = %self.number,
            check = %check_number,
            %amount,
            balance = %self.base.balance(),
            "wrote check"
        );
        Ok(Check::new(check_number, amount, self.number))
    }

    /// Redeem `check` into this account
    ///
    /// The check may have been written by any account, including this one.
    ///
    /// # Errors
    ///
    /// - `AlreadyCashed` if the check was redeemed before
    /// - `ArithmeticOverflow` if crediting would overflow; the check stays uncashed
    pub fn deposit_check(&mut self, check: &mut Check) -> Result<(), AccountError> {
        if check.is_cashed() {
            tracing::warn!(
                account = %self.number,
                check = %check.number(),
                issuer = %check.issuer(),
                "check already cashed"
            );
            return Err(AccountError::already_cashed(check.number(), check.issuer()));
        }

        self.base.credit(check.amount(), "deposit_check")?;
        check.cash();

        tracing::debug!(
            account = %self.number,
            check = %check.number(),
            issuer = %check.issuer(),
            amount = %check.amount(),
            "cashed check"
        );
        Ok(())
    }

    /// Number the next check will carry
    ///
    /// The counter only advances once a check is actually written.
    fn next_number(&self) -> Result<CheckNumber, AccountError> {
        self.current_check.ok_or_else(|| {
            tracing::warn!(account = %self.number, "check numbers exhausted");
            AccountError::check_numbers_exhausted(self.number)
        })
    }
}

impl Default for CheckingAccount {
    fn default() -> Self {
        Self::new()
    }
}

impl Account for CheckingAccount {
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

impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checking Balance: ${}", self.base.balance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn funded(amount: i64) -> CheckingAccount {
        let mut account = CheckingAccount::new();
        account.deposit(Money::from_major(amount)).unwrap();
        account
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = CheckingAccount::new();
        assert_eq!(account.balance(), Money::ZERO);
        assert_eq!(account.issued_checks().count(), 0);
    }

    #[test]
    fn test_accounts_get_distinct_numbers() {
        assert_ne!(CheckingAccount::new().number(), CheckingAccount::new().number());
    }

    #[rstest]
    #[case::below_balance(100, dec!(50), true)]
    #[case::just_below_balance(100, dec!(99.99), true)]
    #[case::equal_to_balance(100, dec!(100), false)]
    #[case::above_balance(100, dec!(150), false)]
    #[case::zero_on_empty_account(0, dec!(0), false)]
    #[case::zero_on_funded_account(100, dec!(0), true)]
    fn test_write_check_requires_strictly_greater_balance(
        #[case] balance: i64,
        #[case] amount: rust_decimal::Decimal,
        #[case] issued: bool,
    ) {
        let mut account = funded(balance);

        let result = account.write_check(Money::new(amount));

        assert_eq!(result.is_ok(), issued);
        let expected = if issued {
            Money::from_major(balance).checked_sub(Money::new(amount)).unwrap()
        } else {
            Money::from_major(balance)
        };
        assert_eq!(account.balance(), expected);
    }

    #[test]
    fn test_write_check_returns_check_for_amount() {
        let mut account = funded(100);

        let check = account.write_check(Money::from_major(50)).unwrap();

        assert_eq!(check.amount(), Money::from_major(50));
        assert_eq!(check.issuer(), account.number());
        assert!(!check.is_cashed());
        assert_eq!(account.balance(), Money::from_major(50));
    }

    #[test]
    fn test_write_check_insufficient_funds_error() {
        let mut account = funded(100);

        let result = account.write_check(Money::from_major(100));

        assert_eq!(
            result,
            Err(AccountError::insufficient_funds(
                account.number(),
                Money::from_major(100),
                Money::from_major(100),
            ))
        );
    }

    #[test]
    fn test_write_check_negative_amount_is_rejected() {
        let mut account = funded(100);

        let result = account.write_check(Money::new(dec!(-10)));

        assert!(matches!(result, Err(AccountError::InvalidAmount { .. })));
        assert_eq!(account.balance(), Money::from_major(100));
    }

    #[test]
    fn test_check_numbers_are_sequential_and_recorded() {
        let mut account = funded(100);

        let first = account.write_check(Money::from_major(10)).unwrap();
        let second = account.write_check(Money::from_major(10)).unwrap();

        assert_eq!(first.number(), CheckNumber::new(1));
        assert_eq!(second.number(), CheckNumber::new(2));
        assert!(account.inspect_for_fraud(CheckNumber::new(1)));
        assert!(account.inspect_for_fraud(CheckNumber::new(2)));
        assert!(!account.inspect_for_fraud(CheckNumber::new(3)));
        assert_eq!(
            account.issued_checks().collect::<Vec<_>>(),
            vec![CheckNumber::new(1), CheckNumber::new(2)]
        );
    }

    #[test]
    fn test_rejected_check_does_not_consume_a_number() {
        let mut account = funded(10);

        assert!(account.write_check(Money::from_major(10)).is_err());
        let check = account.write_check(Money::from_major(5)).unwrap();

        assert_eq!(check.number(), CheckNumber::new(1));
    }

    #[test]
    fn test_untracked_account_never_records_checks() {
        let mut account = CheckingAccount::with_config(&AccountConfig::new(false, 101));
        account.deposit(Money::from_major(100)).unwrap();

        let check = account.write_check(Money::from_major(10)).unwrap();

        assert_eq!(check.number(), CheckNumber::new(101));
        assert!(!account.inspect_for_fraud(check.number()));
        assert_eq!(account.issued_checks().count(), 0);
    }

    #[rstest]
    #[case::tracked(true)]
    #[case::untracked(false)]
    fn test_last_check_number_is_not_reused(#[case] track: bool) {
        let mut account = CheckingAccount::with_config(&AccountConfig::new(track, u32::MAX));
        account.deposit(Money::from_major(100)).unwrap();

        let last = account.write_check(Money::from_major(1)).unwrap();
        assert_eq!(last.number(), CheckNumber::new(u32::MAX));

        let result = account.write_check(Money::from_major(1));

        assert_eq!(
            result,
            Err(AccountError::check_numbers_exhausted(account.number()))
        );
        assert_eq!(account.balance(), Money::from_major(99));
    }

    #[test]
    fn test_recorded_check_number_is_refused() {
        let mut account = funded(100);
        account.issued_checks.insert(CheckNumber::new(1));

        let result = account.write_check(Money::from_major(10));

        assert_eq!(
            result,
            Err(AccountError::duplicate_check_number(
                CheckNumber::new(1),
                account.number(),
            ))
        );
        assert_eq!(account.balance(), Money::from_major(100));
    }

    #[test]
    fn test_deposit_check_credits_and_cashes() {
        let mut issuer = funded(100);
        let mut payee = CheckingAccount::new();
        let mut check = issuer.write_check(Money::from_major(20)).unwrap();

        payee.deposit_check(&mut check).unwrap();

        assert_eq!(payee.balance(), Money::from_major(20));
        assert!(check.is_cashed());
    }

    #[test]
    fn test_deposit_check_twice_is_refused() {
        let mut issuer = funded(100);
        let mut payee = CheckingAccount::new();
        let mut check = issuer.write_check(Money::from_major(20)).unwrap();
        payee.deposit_check(&mut check).unwrap();

        let result = payee.deposit_check(&mut check);

        assert_eq!(
            result,
            Err(AccountError::already_cashed(check.number(), issuer.number()))
        );
        assert_eq!(payee.balance(), Money::from_major(20));
        assert!(check.is_cashed());
    }

    #[test]
    fn test_cashed_check_is_refused_by_other_accounts() {
        let mut issuer = funded(100);
        let mut first = CheckingAccount::new();
        let mut second = CheckingAccount::new();
        let mut check = issuer.write_check(Money::from_major(20)).unwrap();
        first.deposit_check(&mut check).unwrap();

        assert!(second.deposit_check(&mut check).is_err());
        assert_eq!(second.balance(), Money::ZERO);
    }

    #[test]
    fn test_issuer_can_redeposit_own_check() {
        let mut account = funded(100);
        let mut check = account.write_check(Money::from_major(30)).unwrap();
        assert_eq!(account.balance(), Money::from_major(70));

        account.deposit_check(&mut check).unwrap();

        assert_eq!(account.balance(), Money::from_major(100));
    }

    #[test]
    fn test_overflowing_deposit_leaves_check_uncashed() {
        let mut issuer = funded(100);
        let mut payee = CheckingAccount::new();
        payee
            .deposit(Money::new(rust_decimal::Decimal::MAX))
            .unwrap();
        let mut check = issuer.write_check(Money::from_major(20)).unwrap();

        let result = payee.deposit_check(&mut check);

        assert!(matches!(
            result,
            Err(AccountError::ArithmeticOverflow { .. })
        ));
        assert!(!check.is_cashed());
    }

    #[test]
    fn test_display() {
        let account = funded(100);
        assert_eq!(account.to_string(), "Checking Balance: $100.00");
    }
}
