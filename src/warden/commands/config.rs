use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigStore, SHOW_ENTRY_SUM, SHOW_HISTORY};
use crate::error::{CalcError, Result};
use tracing::warn;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
}

/// Display toggles read from the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub show_history: bool,
    pub show_entry_sum: bool,
}

pub fn run(config: &ConfigStore, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.options())),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Ok(value) => Ok(CmdResult::default().with_config(vec![(key, value)])),
            Err(e @ CalcError::ConfigFieldMissing { .. }) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e.to_string()));
                result.error = Some(e);
                Ok(result)
            }
            Err(e) => Err(e),
        },
    }
}

/// Reads the display toggles. A missing toggle counts as off.
pub fn display_settings(config: &ConfigStore) -> DisplaySettings {
    let flag = |option: &str| {
        config.get_flag(option).unwrap_or_else(|e| {
            warn!(error = %e, "display toggle unavailable, treating as off");
            false
        })
    };

    DisplaySettings {
        show_history: flag(SHOW_HISTORY),
        show_entry_sum: flag(SHOW_ENTRY_SUM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IniDocument, SAVEPATH};

    fn config(text: &str) -> ConfigStore {
        ConfigStore::detached(IniDocument::parse(text).unwrap())
    }

    #[test]
    fn test_show_all() {
        let store = config("[Calculator]\nsavepath = \"a.json\"\nshowhistory = True\n");
        let result = run(&store, ConfigAction::ShowAll).unwrap();
        assert_eq!(
            result.config,
            vec![
                (SAVEPATH.to_string(), "a.json".to_string()),
                (SHOW_HISTORY.to_string(), "True".to_string()),
            ]
        );
    }

    #[test]
    fn test_show_key() {
        let store = config("[Calculator]\nsavepath = \"a.json\"\n");
        let result = run(&store, ConfigAction::ShowKey(SAVEPATH.to_string())).unwrap();
        assert_eq!(result.config, vec![(SAVEPATH.to_string(), "a.json".to_string())]);
    }

    #[test]
    fn test_show_missing_key_is_reported() {
        let store = config("[Calculator]\n");
        let result = run(&store, ConfigAction::ShowKey("nope".to_string())).unwrap();
        assert!(result.is_error());
        assert!(result.messages[0].content.contains("'nope'"));
    }

    #[test]
    fn test_display_settings() {
        let store = config("[Calculator]\nshowhistory = false\nshowentrysum = TRUE\n");
        assert_eq!(
            display_settings(&store),
            DisplaySettings {
                show_history: false,
                show_entry_sum: true
            }
        );
    }

    #[test]
    fn test_display_settings_missing_toggles_are_off() {
        let store = config("[Calculator]\n");
        let settings = display_settings(&store);
        assert!(!settings.show_history);
        assert!(!settings.show_entry_sum);
    }
}
