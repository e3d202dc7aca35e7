//! # History Storage
//!
//! The [`HistoryStore`] trait is the seam between the calculator and wherever
//! its history lives.
//!
//! ## Implementations
//!
//! - [`fs::FileHistory`]: Production storage
//!   - A single JSON document at the configured `savepath`
//!   - Every write rewrites the whole document
//!
//! - [`memory::InMemoryHistory`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "actions": [
//!         { "5 + 3": 8.0 },
//!         { "sqrt 16": 4.0 }
//!     ]
//! }
//! ```
//!
//! ## Concurrency
//!
//! There is no locking. Two processes sharing a history file can interleave
//! read-modify-write cycles and lose each other's entries. Writes go to a
//! temporary file that is then renamed over the target, so a reader never sees
//! a half-written document.

use crate::error::{CalcError, Result};
use crate::model::HistoryEntry;
use std::path::Path;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Ordered, append-only (but clearable) log of computed actions.
pub trait HistoryStore {
    /// Appends one entry at the end of the log.
    fn append(&mut self, action: &str, result: f64) -> Result<()>;

    /// Every entry, oldest first.
    fn entries(&self) -> Result<Vec<HistoryEntry>>;

    /// Drops all entries.
    fn clear(&mut self) -> Result<()>;

    /// The last `n` entries, oldest first. Returns fewer when the log is shorter.
    fn tail(&self, n: usize) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.entries()?;
        let start = entries.len().saturating_sub(n);
        Ok(entries.split_off(start))
    }
}

/// Writes `content` next to `path` and renames it into place.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    std::fs::write(&tmp_path, content).map_err(CalcError::storage(&tmp_path))?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(CalcError::storage(path)(e));
    }
    Ok(())
}
