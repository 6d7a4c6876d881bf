//! The account directory: all accounts keyed by number, plus number
//! allocation.
//!
//! The directory owns the numbering counter. Numbers are handed out
//! strictly increasing and never reused, including across snapshot and
//! reload cycles.

use crate::account::{Account, Receipt};
use crate::error::{Result, TellerError};
use crate::money::Money;
use crate::snapshot::{AccountRecord, Snapshot};
use log::{debug, warn};
use std::collections::HashMap;

/// First account number handed out by a fresh directory.
pub const STARTING_ACCOUNT_NUMBER: u32 = 1000;

/// The collection of accounts and the numbering counter.
#[derive(Debug)]
pub struct AccountDirectory {
    /// Accounts indexed by account number.
    accounts: HashMap<u32, Account>,

    /// Next account number to allocate.
    next_number: u32,
}

impl AccountDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        AccountDirectory {
            accounts: HashMap::new(),
            next_number: STARTING_ACCOUNT_NUMBER,
        }
    }

    /// Opens a new zero-balance account and returns it.
    ///
    /// Holder names are not keys; the same name may own several accounts.
    pub fn create_account(&mut self, holder: &str, pin: &str) -> &Account {
        let number = self.next_number;
        self.next_number += 1;
        debug!("created account {} for {}", number, holder);

        self.accounts
            .entry(number)
            .or_insert_with(|| Account::new(number, holder, pin))
    }

    /// Looks up an account and checks its PIN.
    ///
    /// # Errors
    /// - `UnknownAccount` when the number is absent (checked first)
    /// - `IncorrectPin` on credential mismatch
    pub fn authenticate(&mut self, number: u32, pin: &str) -> Result<&mut Account> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(TellerError::UnknownAccount(number))?;

        if !account.pin_matches(pin) {
            warn!("account {}: login rejected, PIN mismatch", number);
            return Err(TellerError::IncorrectPin);
        }

        Ok(account)
    }

    /// Deposits into the numbered account.
    ///
    /// # Errors
    /// - `UnknownAccount` when the number is absent
    /// - any error from [`Account::deposit`]
    pub fn deposit(&mut self, number: u32, amount: Money) -> Result<Receipt> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(TellerError::UnknownAccount(number))?;
        account.deposit(amount)
    }

    /// Withdraws from the numbered account.
    ///
    /// # Errors
    /// - `UnknownAccount` when the number is absent
    /// - any error from [`Account::withdraw`]
    pub fn withdraw(&mut self, number: u32, amount: Money, pin: &str) -> Result<Receipt> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(TellerError::UnknownAccount(number))?;
        account.withdraw(amount, pin)
    }

    /// Returns an account by number.
    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Number of accounts in the directory.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` when the directory holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// The number the next created account will receive.
    pub fn next_number(&self) -> u32 {
        self.next_number
    }

    /// Produces a serializable representation of the full directory.
    ///
    /// Pure function; keys are string-encoded account numbers.
    pub fn snapshot(&self) -> Snapshot {
        self.accounts
            .values()
            .map(|account| {
                (
                    account.number().to_string(),
                    AccountRecord::from_account(account),
                )
            })
            .collect()
    }

    /// Rebuilds a directory from a persisted snapshot.
    ///
    /// The numbering counter becomes `max(existing numbers) + 1`, or the
    /// starting value when the snapshot is empty.
    ///
    /// # Errors
    /// - `CorruptData` when a map key is not a number or a record is
    ///   malformed.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let mut accounts = HashMap::new();

        for (key, record) in snapshot {
            let number: u32 = key.parse().map_err(|_| {
                TellerError::CorruptData(format!("account key {key:?} is not a number"))
            })?;
            accounts.insert(number, record.to_account()?);
        }

        let next_number = accounts
            .keys()
            .max()
            .map(|highest| highest + 1)
            .unwrap_or(STARTING_ACCOUNT_NUMBER);
        debug!(
            "loaded {} account(s), next number {}",
            accounts.len(),
            next_number
        );

        Ok(AccountDirectory {
            accounts,
            next_number,
        })
    }
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amt(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_numbers_start_at_1000_and_increase() {
        let mut directory = AccountDirectory::new();

        assert_eq!(directory.create_account("Alice", "1111").number(), 1000);
        assert_eq!(directory.create_account("Bob", "2222").number(), 1001);
        assert_eq!(directory.create_account("Alice", "3333").number(), 1002);
        assert_eq!(directory.next_number(), 1003);
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn test_authenticate_unknown_account() {
        let mut directory = AccountDirectory::new();

        let err = directory.authenticate(9999, "1111").unwrap_err();
        assert!(matches!(err, TellerError::UnknownAccount(9999)));
    }

    #[test]
    fn test_authenticate_wrong_pin() {
        let mut directory = AccountDirectory::new();
        let number = directory.create_account("Alice", "1111").number();

        let err = directory.authenticate(number, "9999").unwrap_err();
        assert!(matches!(err, TellerError::IncorrectPin));
    }

    #[test]
    fn test_authenticate_returns_account() {
        let mut directory = AccountDirectory::new();
        let number = directory.create_account("Alice", "1111").number();

        let account = directory.authenticate(number, "1111").unwrap();
        assert_eq!(account.holder(), "Alice");
    }

    #[test]
    fn test_deposit_and_withdraw_through_directory() {
        let mut directory = AccountDirectory::new();
        let number = directory.create_account("Alice", "1111").number();

        directory.deposit(number, amt("100")).unwrap();
        directory.withdraw(number, amt("40"), "1111").unwrap();

        let account = directory.account(number).unwrap();
        assert_eq!(account.balance().to_string(), "60.00");
        assert_eq!(account.ledger().len(), 2);
    }

    #[test]
    fn test_deposit_to_unknown_account() {
        let mut directory = AccountDirectory::new();

        let err = directory.deposit(1000, amt("10")).unwrap_err();
        assert!(matches!(err, TellerError::UnknownAccount(1000)));
    }

    #[test]
    fn test_snapshot_round_trip_preserves_state() {
        let mut directory = AccountDirectory::new();
        let alice = directory.create_account("Alice", "1111").number();
        let bob = directory.create_account("Bob", "2222").number();
        directory.deposit(alice, amt("100")).unwrap();
        directory.withdraw(alice, amt("40"), "1111").unwrap();
        directory.deposit(bob, amt("5")).unwrap();

        let restored = AccountDirectory::from_snapshot(&directory.snapshot()).unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(restored.next_number(), directory.next_number());

        let restored_alice = restored.account(alice).unwrap();
        assert_eq!(restored_alice.holder(), "Alice");
        assert_eq!(restored_alice.balance().to_string(), "60.00");
        assert_eq!(restored_alice.ledger().len(), 2);
        assert_eq!(
            restored_alice.ledger()[0].description(),
            directory.account(alice).unwrap().ledger()[0].description()
        );

        let restored_bob = restored.account(bob).unwrap();
        assert!(restored_bob.pin_matches("2222"));
        assert_eq!(restored_bob.balance().to_string(), "5.00");
    }

    #[test]
    fn test_numbers_not_reused_after_reload() {
        let mut directory = AccountDirectory::new();
        directory.create_account("Alice", "1111");
        directory.create_account("Bob", "2222");
        directory.create_account("Carol", "3333");

        let mut reloaded = AccountDirectory::from_snapshot(&directory.snapshot()).unwrap();

        assert_eq!(reloaded.create_account("Dave", "4444").number(), 1003);
    }

    #[test]
    fn test_empty_snapshot_resets_counter_to_default() {
        let directory = AccountDirectory::from_snapshot(&Snapshot::new()).unwrap();

        assert!(directory.is_empty());
        assert_eq!(directory.next_number(), STARTING_ACCOUNT_NUMBER);
    }

    #[test]
    fn test_non_numeric_snapshot_key_is_corrupt() {
        let mut directory = AccountDirectory::new();
        directory.create_account("Alice", "1111");

        let mut snapshot = directory.snapshot();
        let record = snapshot.remove("1000").unwrap();
        snapshot.insert("not-a-number".to_string(), record);

        let err = AccountDirectory::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, TellerError::CorruptData(_)));
    }
}
