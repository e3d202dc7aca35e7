use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::format_value;
use crate::store::HistoryStore;

pub fn recent<S: HistoryStore>(store: &S, n: usize) -> Result<CmdResult> {
    let entries = store.tail(n)?;
    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info("History is empty."));
    }
    Ok(result.with_entries(entries))
}

/// Sum of the results of the last `n` entries. NaN results make the sum NaN.
pub fn entry_sum<S: HistoryStore>(store: &S, n: usize) -> Result<f64> {
    Ok(store.tail(n)?.iter().fold(0.0, |acc, e| acc + e.result))
}

pub fn sum<S: HistoryStore>(store: &S, n: usize) -> Result<CmdResult> {
    let total = entry_sum(store, n)?;
    let mut result = CmdResult::default();
    result.value = Some(total);
    result.add_message(CmdMessage::info(format!(
        "Sum of last {} results: {}",
        n,
        format_value(total)
    )));
    Ok(result)
}

pub fn clear<S: HistoryStore>(store: &mut S) -> Result<CmdResult> {
    store.clear()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Cleared calculator history"));
    Ok(result)
}
