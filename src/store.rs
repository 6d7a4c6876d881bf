//! Persistence port and the JSON file adapter behind it.
//!
//! The session writes the whole directory after every mutation. Every save
//! is a full-file overwrite with no locking or partial-write protection;
//! only one in-process actor ever touches the file.

use crate::error::{Result, TellerError};
use crate::snapshot::Snapshot;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage port for directory snapshots.
///
/// The session depends on this trait rather than on the filesystem, so
/// tests can substitute in-memory doubles.
pub trait SnapshotStore {
    /// Loads the last saved snapshot, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Replaces the stored snapshot.
    ///
    /// Failures must surface to the caller; a silently dropped save leaves
    /// the in-memory directory ahead of the durable one.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

/// Stores the snapshot as one pretty-printed JSON document at a fixed path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            debug!("no accounts file at {}, starting empty", self.path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&contents).map_err(|e| {
            TellerError::CorruptData(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let contents = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, contents)?;
        debug!(
            "saved {} account(s) to {}",
            snapshot.len(),
            self.path.display()
        );

        Ok(())
    }
}
