use crate::dispatch::Command;
use crate::error::CalcError;
use crate::model::HistoryEntry;

pub mod config;
pub mod evaluate;
pub mod history;

/// Number of entries the shell shows and sums by default.
pub const RECENT_ENTRIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Result of a numeric action.
    pub value: Option<f64>,
    /// Control command that was executed.
    pub command: Option<Command>,
    /// Recoverable failure (bad input, division by zero, missing option).
    pub error: Option<CalcError>,
    pub entries: Vec<HistoryEntry>,
    pub config: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<HistoryEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_config(mut self, config: Vec<(String, String)>) -> Self {
        self.config = config;
        self
    }

    /// True when the session should end.
    pub fn is_stop(&self) -> bool {
        self.command == Some(Command::Stop)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
