use super::{write_atomic, HistoryStore};
use crate::config::{ConfigStore, SAVEPATH};
use crate::error::{CalcError, Result};
use crate::model::{HistoryDocument, HistoryEntry};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// History kept in a single JSON document.
///
/// Every operation reads the file fresh, so the on-disk document is the only
/// state this store holds.
#[derive(Debug)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    /// Opens the history document named by the `savepath` setting.
    ///
    /// A missing `savepath` is fatal: without it there is nowhere to keep history.
    pub fn open(config: &ConfigStore) -> Result<Self> {
        let path = config.get(SAVEPATH)?;
        Self::open_at(path)
    }

    /// Opens the history document at `path`, creating it when missing.
    ///
    /// A file that is empty or does not parse as a history document is reset to
    /// `{"actions": []}`.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };

        if let Some(parent) = store.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CalcError::storage(parent))?;
            }
        }

        if !store.path.exists() {
            debug!(path = %store.path.display(), "creating history file");
            store.save(&HistoryDocument::default())?;
            return Ok(store);
        }

        let bytes = fs::read(&store.path).map_err(CalcError::storage(&store.path))?;
        match std::str::from_utf8(&bytes) {
            Err(e) => {
                warn!(
                    path = %store.path.display(),
                    error = %e,
                    "history is not UTF-8, starting empty"
                );
                store.save(&HistoryDocument::default())?;
            }
            Ok(content) if content.trim().is_empty() => {
                store.save(&HistoryDocument::default())?;
            }
            Ok(content) => store.recover(content)?,
        }

        Ok(store)
    }

    /// Keeps a parseable document as is. A document whose only defect is bare
    /// `NaN`/`Infinity` results is rewritten with `null` in their place;
    /// anything else is reset to empty.
    fn recover(&self, content: &str) -> Result<()> {
        let err = match serde_json::from_str::<HistoryDocument>(content) {
            Ok(_) => return Ok(()),
            Err(e) => e,
        };

        let repaired = replace_non_finite_literals(content)
            .and_then(|fixed| serde_json::from_str::<HistoryDocument>(&fixed).ok());
        match repaired {
            Some(doc) => {
                warn!(
                    path = %self.path.display(),
                    "non-finite results in history rewritten as null"
                );
                self.save(&doc)
            }
            None => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "unreadable history, starting empty"
                );
                self.save(&HistoryDocument::default())
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HistoryDocument> {
        let content = fs::read_to_string(&self.path).map_err(CalcError::storage(&self.path))?;
        if content.trim().is_empty() {
            return Ok(HistoryDocument::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, doc: &HistoryDocument) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut ser)?;
        let content = String::from_utf8_lossy(&buf);
        write_atomic(&self.path, &content)
    }
}

const NON_FINITE_LITERALS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Replaces bare `NaN`, `Infinity` and `-Infinity` tokens outside of string
/// literals with `null`. Returns `None` when there was nothing to replace.
fn replace_non_finite_literals(content: &str) -> Option<String> {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    let mut in_string = false;
    let mut replaced = false;

    while let Some(c) = rest.chars().next() {
        if in_string {
            match c {
                '\\' => {
                    let escaped = rest[1..].chars().next().map_or(0, char::len_utf8);
                    out.push_str(&rest[..1 + escaped]);
                    rest = &rest[1 + escaped..];
                    continue;
                }
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(literal) = NON_FINITE_LITERALS.iter().find(|l| rest.starts_with(**l)) {
            out.push_str("null");
            rest = &rest[literal.len()..];
            replaced = true;
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    replaced.then_some(out)
}

impl HistoryStore for FileHistory {
    fn append(&mut self, action: &str, result: f64) -> Result<()> {
        let mut doc = self.load()?;
        doc.actions.push(HistoryEntry::new(action, result));
        self.save(&doc)?;
        debug!(action, result, total = doc.actions.len(), "history entry saved");
        Ok(())
    }

    fn entries(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.load()?.actions)
    }

    fn clear(&mut self) -> Result<()> {
        self.save(&HistoryDocument::default())?;
        debug!(path = %self.path.display(), "history cleared");
        Ok(())
    }
}
