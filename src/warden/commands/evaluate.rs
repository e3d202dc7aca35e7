use crate::commands::{CmdMessage, CmdResult};
use crate::dispatch::{self, Command, Outcome};
use crate::error::{CalcError, Result};
use crate::model::format_value;
use crate::store::HistoryStore;
use tracing::debug;

pub const INVALID_INPUT_HINT: &str =
    "Invalid input, enter the action in format (num action num / action num / action)!";

/// Evaluates one input line and records successful results.
///
/// Bad input and division by zero come back inside the `CmdResult`; only
/// storage failures are returned as `Err`.
pub fn run<S: HistoryStore>(store: &mut S, line: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match dispatch::evaluate(line) {
        Ok(Outcome::Value(value)) => {
            store.append(&dispatch::normalize(line), value)?;
            result.value = Some(value);
            result.add_message(CmdMessage::success(format!(
                "The result is {}",
                format_value(value)
            )));
            if !value.is_finite() {
                result.add_message(CmdMessage::warning(
                    "Result is not a finite number, it is saved as null",
                ));
            }
        }
        Ok(Outcome::Command(Command::Stop)) => {
            result.command = Some(Command::Stop);
            result.add_message(CmdMessage::info("Stopping the program..."));
        }
        Ok(Outcome::Command(Command::ClearHistory)) => {
            store.clear()?;
            result.command = Some(Command::ClearHistory);
            result.add_message(CmdMessage::success("Cleared calculator history"));
        }
        Err(e @ CalcError::InvalidInput(_)) => {
            debug!(error = %e, "rejected input");
            result.add_message(CmdMessage::error(INVALID_INPUT_HINT));
            result.error = Some(e);
        }
        Err(CalcError::DivisionByZero) => {
            result.add_message(CmdMessage::error("MATH ERROR: division by zero"));
            result.error = Some(CalcError::DivisionByZero);
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
