//! Persisted snapshot layout for the accounts file.
//!
//! The file is one JSON document mapping string-encoded account numbers to
//! account records:
//!
//! ```json
//! {
//!   "1000": {
//!     "name": "Alice",
//!     "pin": "1111",
//!     "balance": "60.00",
//!     "account_number": 1000,
//!     "transactions": ["[2024-01-01 10:30:00] deposited 100.00"]
//!   }
//! }
//! ```
//!
//! Legacy files may carry integer PINs and bare-float balances; both are
//! accepted on load and written back in canonical form.

use crate::account::Account;
use crate::error::Result;
use crate::ledger::LedgerEntry;
use crate::money::Money;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Serializable point-in-time representation of the whole directory.
///
/// A `BTreeMap` keeps file output in stable key order.
pub type Snapshot = BTreeMap<String, AccountRecord>;

/// One account as laid out in the accounts file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub name: String,

    /// Canonically a string; legacy files may store an integer.
    #[serde(deserialize_with = "pin_from_string_or_int")]
    pub pin: String,

    pub balance: Money,

    pub account_number: u32,

    /// Ledger entries in `[<timestamp>] <description>` form.
    #[serde(default)]
    pub transactions: Vec<String>,
}

impl AccountRecord {
    /// Flattens an account into its persisted form.
    pub fn from_account(account: &Account) -> Self {
        AccountRecord {
            name: account.holder().to_string(),
            pin: account.pin().to_string(),
            balance: account.balance(),
            account_number: account.number(),
            transactions: account.ledger().iter().map(|e| e.to_record()).collect(),
        }
    }

    /// Rebuilds the account this record describes.
    ///
    /// # Errors
    /// - `CorruptData` when a ledger entry string is malformed.
    pub fn to_account(&self) -> Result<Account> {
        let ledger = self
            .transactions
            .iter()
            .map(|record| LedgerEntry::from_record(record))
            .collect::<Result<Vec<_>>>()?;

        Ok(Account::restore(
            self.account_number,
            self.name.clone(),
            self.pin.clone(),
            self.balance,
            ledger,
        ))
    }
}

fn pin_from_string_or_int<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct PinVisitor;

    impl de::Visitor<'_> for PinVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a PIN as a string or integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(PinVisitor)
}
