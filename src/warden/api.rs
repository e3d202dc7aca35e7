//! # API Facade
//!
//! [`CalcApi`] is the single entry point for every calculator operation. It
//! owns the settings and the history store and forwards to the command layer.
//!
//! The facade does not print, prompt or exit. It returns `CmdResult`s and
//! leaves presentation to the caller.
//!
//! ## Generic Over HistoryStore
//!
//! - Production: `CalcApi<FileHistory>`, built with [`CalcApi::open`]
//! - Testing: `CalcApi<InMemoryHistory>`

use crate::commands;
use crate::config::ConfigStore;
use crate::error::Result;
use crate::store::fs::FileHistory;
use crate::store::HistoryStore;
use std::path::Path;
use tracing::info;

/// The application context: settings plus history, built once per process.
pub struct CalcApi<S: HistoryStore> {
    store: S,
    config: ConfigStore,
}

impl CalcApi<FileHistory> {
    /// Loads (or creates) the settings in `data_dir` and the history file they
    /// point at. Any failure here is fatal.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let config = ConfigStore::open(data_dir)?;
        let store = FileHistory::open(&config)?;
        info!(
            config = %config.path().display(),
            history = %store.path().display(),
            "calculator storage ready"
        );
        Ok(Self::new(store, config))
    }
}

impl<S: HistoryStore> CalcApi<S> {
    pub fn new(store: S, config: ConfigStore) -> Self {
        Self { store, config }
    }

    /// Evaluates one line of input and records the result.
    pub fn process(&mut self, line: &str) -> Result<commands::CmdResult> {
        commands::evaluate::run(&mut self.store, line)
    }

    pub fn recent(&self, n: usize) -> Result<commands::CmdResult> {
        commands::history::recent(&self.store, n)
    }

    pub fn entry_sum(&self, n: usize) -> Result<f64> {
        commands::history::entry_sum(&self.store, n)
    }

    pub fn sum(&self, n: usize) -> Result<commands::CmdResult> {
        commands::history::sum(&self.store, n)
    }

    pub fn clear_history(&mut self) -> Result<commands::CmdResult> {
        commands::history::clear(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config, action)
    }

    pub fn display_settings(&self) -> DisplaySettings {
        commands::config::display_settings(&self.config)
    }
}

pub use crate::commands::config::{ConfigAction, DisplaySettings};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, RECENT_ENTRIES};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IniDocument, SAVES_FILENAME};
    use crate::error::CalcError;
    use crate::model::HistoryEntry;
    use crate::store::memory::InMemoryHistory;
    use tempfile::TempDir;

    fn memory_api() -> CalcApi<InMemoryHistory> {
        let doc = IniDocument::parse(
            "[Calculator]\nsavepath = \"x.json\"\nshowhistory = True\nshowentrysum = False\n",
        )
        .unwrap();
        CalcApi::new(InMemoryHistory::new(), ConfigStore::detached(doc))
    }

    #[test]
    fn test_process_dispatches_and_records() {
        let mut api = memory_api();
        api.process("5 + 3").unwrap();
        api.process("10 / 4").unwrap();

        let recent = api.recent(1).unwrap();
        assert_eq!(recent.entries, vec![HistoryEntry::new("10 / 4", 2.5)]);
        assert_eq!(api.entry_sum(RECENT_ENTRIES).unwrap(), 10.5);
    }

    #[test]
    fn test_clear_history() {
        let mut api = memory_api();
        api.process("5 + 3").unwrap();
        api.clear_history().unwrap();
        assert!(api.recent(RECENT_ENTRIES).unwrap().entries.is_empty());
    }

    #[test]
    fn test_display_settings() {
        let api = memory_api();
        assert_eq!(
            api.display_settings(),
            DisplaySettings {
                show_history: true,
                show_entry_sum: false
            }
        );
    }

    #[test]
    fn test_open_builds_file_backed_api() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("calc_data");

        let mut api = CalcApi::open(&data_dir).unwrap();
        api.process("sqrt 16").unwrap();

        assert!(data_dir.join(SAVES_FILENAME).exists());
        let reopened = CalcApi::open(&data_dir).unwrap();
        assert_eq!(
            reopened.recent(RECENT_ENTRIES).unwrap().entries,
            vec![HistoryEntry::new("sqrt 16", 4.0)]
        );
    }

    #[test]
    fn test_open_with_broken_config_fails() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("calc_data");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(data_dir.join("settings.ini"), "no section here\n").unwrap();

        let err = CalcApi::open(&data_dir).err().unwrap();
        assert!(matches!(err, CalcError::ConfigParse { line: 1, .. }));
    }
}
