//! Account model and operations.
//!
//! Maintains the invariant: `balance >= 0` after every accepted operation.

use crate::error::{Result, TellerError};
use crate::ledger::LedgerEntry;
use crate::money::Money;
use log::{debug, warn};

/// A successful balance-changing operation, described as data.
///
/// The presentation layer turns receipts into user-facing text; the core
/// never formats messages itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    /// Funds were credited; `balance` is the balance after the deposit.
    Deposit { amount: Money, balance: Money },

    /// Funds were debited; `balance` is the balance after the withdrawal.
    Withdrawal { amount: Money, balance: Money },
}

/// A single bank account: holder, credential, balance, and ledger.
///
/// # Invariants
///
/// - `balance >= 0` is maintained after every accepted operation
/// - the ledger is append-only; insertion order is chronological order
/// - the account number is assigned once and never changes
///
/// The PIN is a plain string compared by exact equality. This is a toy
/// credential scheme with no hashing; do not reuse it anywhere real.
#[derive(Debug, Clone)]
pub struct Account {
    number: u32,
    holder: String,
    pin: String,
    balance: Money,
    ledger: Vec<LedgerEntry>,
}

impl Account {
    /// Creates a new account with a zero balance and empty ledger.
    pub fn new(number: u32, holder: impl Into<String>, pin: impl Into<String>) -> Self {
        Account {
            number,
            holder: holder.into(),
            pin: pin.into(),
            balance: Money::ZERO,
            ledger: Vec::new(),
        }
    }

    /// Reconstructs an account from persisted state.
    pub(crate) fn restore(
        number: u32,
        holder: String,
        pin: String,
        balance: Money,
        ledger: Vec<LedgerEntry>,
    ) -> Self {
        Account {
            number,
            holder,
            pin,
            balance,
            ledger,
        }
    }

    /// The unique account number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The account holder's name.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// The current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Ledger entries in chronological order.
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    pub(crate) fn pin(&self) -> &str {
        &self.pin
    }

    /// Compares a PIN attempt against the stored credential. Exact match.
    pub fn pin_matches(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// Deposits funds into the account.
    ///
    /// A zero amount is accepted and recorded in the ledger even though it
    /// leaves the balance unchanged.
    ///
    /// # Errors
    /// - `InvalidAmount` when `amount` is negative; balance and ledger are
    ///   left untouched.
    pub fn deposit(&mut self, amount: Money) -> Result<Receipt> {
        if amount.is_negative() {
            warn!("account {}: rejected deposit of {}", self.number, amount);
            return Err(TellerError::InvalidAmount(amount));
        }

        self.balance += amount;
        self.ledger
            .push(LedgerEntry::new(format!("deposited {amount}")));
        debug!(
            "account {}: deposited {}, balance {}",
            self.number, amount, self.balance
        );

        Ok(Receipt::Deposit {
            amount,
            balance: self.balance,
        })
    }

    /// Withdraws funds from the account after checking the PIN.
    ///
    /// Checks run in a fixed order: amount validity, then sufficiency, then
    /// the PIN. An invalid or unaffordable request never reveals whether the
    /// PIN was correct.
    ///
    /// # Errors
    /// - `InvalidAmount` when `amount` is negative
    /// - `InsufficientFunds` when `amount` exceeds the balance
    /// - `IncorrectPin` when `pin` does not match the stored credential
    pub fn withdraw(&mut self, amount: Money, pin: &str) -> Result<Receipt> {
        if amount.is_negative() {
            warn!("account {}: rejected withdrawal of {}", self.number, amount);
            return Err(TellerError::InvalidAmount(amount));
        }

        if amount > self.balance {
            warn!(
                "account {}: withdrawal of {} exceeds balance {}",
                self.number, amount, self.balance
            );
            return Err(TellerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        if !self.pin_matches(pin) {
            warn!("account {}: withdrawal rejected, PIN mismatch", self.number);
            return Err(TellerError::IncorrectPin);
        }

        self.balance -= amount;
        self.ledger
            .push(LedgerEntry::new(format!("withdrew {amount}")));
        debug!(
            "account {}: withdrew {}, balance {}",
            self.number, amount, self.balance
        );

        Ok(Receipt::Withdrawal {
            amount,
            balance: self.balance,
        })
    }

    /// Formatted balance for display. Pure read, no side effects.
    pub fn display_balance(&self) -> String {
        self.balance.to_string()
    }
}
