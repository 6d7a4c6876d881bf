//! # Teller
//!
//! A single-user bank account simulator: an interactive text session over
//! an in-memory account directory, persisted to one JSON file after every
//! mutation.
//!
//! ## Design Principles
//!
//! - **Fixed-point amounts**: 2 decimal places via `rust_decimal`
//! - **Structured results**: operations return receipts and typed errors;
//!   the presentation layer owns all user-facing text
//! - **Strict check ordering**: withdrawals validate amount, then funds,
//!   then PIN, and never reveal PIN correctness for an invalid request
//! - **Swappable storage**: the session talks to a `SnapshotStore` port;
//!   the shipped adapter writes one JSON document
//!
//! ## Example
//!
//! ```
//! use teller::{AccountDirectory, Money};
//! use std::str::FromStr;
//!
//! let mut directory = AccountDirectory::new();
//! let number = directory.create_account("Alice", "1111").number();
//! directory.deposit(number, Money::from_str("100").unwrap()).unwrap();
//! directory.withdraw(number, Money::from_str("40").unwrap(), "1111").unwrap();
//! assert_eq!(directory.account(number).unwrap().display_balance(), "60.00");
//! ```

pub mod account;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod money;
pub mod snapshot;
pub mod store;
pub mod ui;

pub use account::{Account, Receipt};
pub use directory::{AccountDirectory, STARTING_ACCOUNT_NUMBER};
pub use error::{Result, TellerError};
pub use ledger::LedgerEntry;
pub use money::Money;
pub use snapshot::{AccountRecord, Snapshot};
pub use store::{JsonFileStore, SnapshotStore};
pub use ui::Session;
