//! Error types for the teller core.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for teller operations
pub type Result<T> = std::result::Result<T, TellerError>;

/// Errors that can occur while operating on accounts or their storage.
#[derive(Error, Debug)]
pub enum TellerError {
    /// Negative amount passed to a deposit or withdrawal
    #[error("amount cannot be negative: {0}")]
    InvalidAmount(Money),

    /// Withdrawal larger than the current balance
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// PIN does not match the stored credential
    #[error("incorrect PIN")]
    IncorrectPin,

    /// No account with the given number
    #[error("unknown account number {0}")]
    UnknownAccount(u32),

    /// Persisted record is malformed or missing required fields
    #[error("corrupt account data: {0}")]
    CorruptData(String),

    /// Failed to read or write the accounts file
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Failed to encode the directory snapshot
    #[error("snapshot encoding error: {0}")]
    SnapshotEncoding(#[from] serde_json::Error),
}
