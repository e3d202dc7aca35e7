//! # Settings
//!
//! Calculator settings live in an INI file, `<data-dir>/settings.ini`, under a
//! single `[Calculator]` section:
//!
//! ```text
//! [Calculator]
//! savepath = "calc_data/saved_actions.json"
//! showhistory = True
//! showentrysum = True
//! ```
//!
//! `savepath` is stored with literal double quotes as part of the value. Every
//! read through [`ConfigStore::get`] strips quote characters, so files written by
//! older versions keep working.
//!
//! The store only ever *adds* missing options with their defaults. Nothing a
//! user does at the prompt changes the file.

use crate::error::{CalcError, Result};
use crate::store::write_atomic;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SECTION: &str = "Calculator";
pub const DEFAULT_DATA_DIR: &str = "calc_data";
pub const CONFIG_FILENAME: &str = "settings.ini";
pub const SAVES_FILENAME: &str = "saved_actions.json";

pub const SAVEPATH: &str = "savepath";
pub const SHOW_HISTORY: &str = "showhistory";
pub const SHOW_ENTRY_SUM: &str = "showentrysum";

/// Ordered, in-memory view of an INI document.
///
/// Option names are case-insensitive and kept lowercase. Section and option
/// order is preserved so a rewrite only appends what was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IniSection {
    name: String,
    options: Vec<(String, String)>,
}

impl IniDocument {
    pub fn parse(text: &str) -> Result<Self> {
        let mut doc = IniDocument::default();
        let mut current: Option<usize> = None;

        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = Some(doc.section_index_or_insert(name.trim()));
                continue;
            }

            let parse_err = || CalcError::ConfigParse {
                line: i + 1,
                content: raw.to_string(),
            };

            let section = current.ok_or_else(parse_err)?;
            let split_at = line.find(|c: char| c == '=' || c == ':').ok_or_else(parse_err)?;
            let key = line[..split_at].trim();
            if key.is_empty() {
                return Err(parse_err());
            }
            let value = line[split_at + 1..].trim();
            doc.sections[section].set(key, value);
        }

        Ok(doc)
    }

    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        let option = option.to_lowercase();
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .options
            .iter()
            .find(|(k, _)| *k == option)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `option` in `section`, creating the section when absent.
    pub fn set(&mut self, section: &str, option: &str, value: &str) {
        let idx = self.section_index_or_insert(section);
        self.sections[idx].set(option, value);
    }

    pub fn options(&self, section: &str) -> Vec<(&str, &str)> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .map(|s| {
                s.options
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!("[{}]\n", section.name));
            for (key, value) in &section.options {
                out.push_str(&format!("{} = {}\n", key, value));
            }
            out.push('\n');
        }
        out
    }

    fn section_index_or_insert(&mut self, name: &str) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.name == name) {
            return idx;
        }
        self.sections.push(IniSection {
            name: name.to_string(),
            options: Vec::new(),
        });
        self.sections.len() - 1
    }
}

impl IniSection {
    fn set(&mut self, option: &str, value: &str) {
        let option = option.to_lowercase();
        match self.options.iter_mut().find(|(k, _)| *k == option) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.options.push((option, value.to_string())),
        }
    }
}

/// Durable calculator settings backed by `settings.ini`.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    data_dir: PathBuf,
    document: IniDocument,
}

impl ConfigStore {
    /// Opens (or creates) the settings file inside `data_dir`.
    ///
    /// Creates the directory when missing, loads whatever is on disk, fills in
    /// `savepath`, `showhistory` and `showentrysum` in that order, then rewrites
    /// the whole file once.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(CalcError::storage(&data_dir))?;
            debug!(dir = %data_dir.display(), "created data directory");
        }

        let path = data_dir.join(CONFIG_FILENAME);
        let document = if path.exists() {
            let content = fs::read_to_string(&path).map_err(CalcError::storage(&path))?;
            IniDocument::parse(&content)?
        } else {
            IniDocument::default()
        };

        let mut store = Self {
            path,
            data_dir,
            document,
        };

        for (option, default) in store.defaults() {
            store.ensure_option(option, &default)?;
        }
        store.save()?;

        Ok(store)
    }

    /// Returns the stored value of `option`, or stores and returns `default`
    /// when the option (or the whole section) is missing.
    ///
    /// The returned value is the raw stored text, quotes included.
    pub fn ensure_option(&mut self, option: &str, default: &str) -> Result<String> {
        if let Some(value) = self.document.get(SECTION, option) {
            return Ok(value.to_string());
        }

        debug!(option, default, "config option missing, writing default");
        self.document.set(SECTION, option, default);
        self.save()?;
        Ok(default.to_string())
    }

    /// Reads `option` with all quote characters removed.
    pub fn get(&self, option: &str) -> Result<String> {
        self.document
            .get(SECTION, option)
            .map(|v| v.replace('"', ""))
            .ok_or_else(|| CalcError::ConfigFieldMissing {
                section: SECTION.to_string(),
                option: option.to_string(),
            })
    }

    /// Reads a boolean toggle. Any casing of `true` counts as set.
    pub fn get_flag(&self, option: &str) -> Result<bool> {
        self.get(option).map(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    /// All options of the calculator section, quotes stripped, in file order.
    pub fn options(&self) -> Vec<(String, String)> {
        self.document
            .options(SECTION)
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.replace('"', "")))
            .collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// A store that never touches the filesystem.
    #[cfg(test)]
    pub(crate) fn detached(document: IniDocument) -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILENAME),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            document,
        }
    }

    fn defaults(&self) -> [(&'static str, String); 3] {
        let savepath = self.data_dir.join(SAVES_FILENAME);
        [
            (SAVEPATH, format!("\"{}\"", savepath.display())),
            (SHOW_HISTORY, "True".to_string()),
            (SHOW_ENTRY_SUM, "True".to_string()),
        ]
    }

    fn save(&self) -> Result<()> {
        write_atomic(&self.path, &self.document.render())
    }
}
