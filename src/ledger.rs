//! Ledger entries: immutable timestamped records of balance changes.
//!
//! In memory an entry is structured (timestamp plus description); in the
//! accounts file it is flattened to a single `[<timestamp>] <description>`
//! string, the layout legacy files already use.

use crate::error::TellerError;
use chrono::Local;

/// Timestamp format for ledger entries, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local time formatted for ledger entries.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// One immutable record of a balance-changing event.
///
/// Entries are created only as a side effect of deposits and withdrawals and
/// are never edited or removed; insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    timestamp: String,
    description: String,
}

impl LedgerEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(description: impl Into<String>) -> Self {
        LedgerEntry {
            timestamp: timestamp_now(),
            description: description.into(),
        }
    }

    /// When the event happened, in [`TIMESTAMP_FORMAT`].
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// What happened, as plain domain text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Renders the persisted form: `[<timestamp>] <description>`.
    pub fn to_record(&self) -> String {
        format!("[{}] {}", self.timestamp, self.description)
    }

    /// Parses the persisted form back into an entry.
    ///
    /// # Errors
    /// - `CorruptData` when the bracketed timestamp prefix is missing.
    pub fn from_record(record: &str) -> Result<Self, TellerError> {
        record
            .strip_prefix('[')
            .and_then(|rest| rest.split_once("] "))
            .map(|(timestamp, description)| LedgerEntry {
                timestamp: timestamp.to_string(),
                description: description.to_string(),
            })
            .ok_or_else(|| {
                TellerError::CorruptData(format!(
                    "ledger entry {record:?} is not of the form \"[timestamp] description\""
                ))
            })
    }
}
