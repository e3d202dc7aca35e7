use super::HistoryStore;
use crate::error::Result;
use crate::model::HistoryEntry;

/// In-memory history for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&mut self, action: &str, result: f64) -> Result<()> {
        self.entries.push(HistoryEntry::new(action, result));
        Ok(())
    }

    fn entries(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}
