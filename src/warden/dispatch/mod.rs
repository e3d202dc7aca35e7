//! # Action Dispatch
//!
//! Turns one line of user input into either a number or a control command.
//!
//! Accepted shapes, after lowercasing and splitting on single spaces:
//!
//! ```text
//! <num> <binary-op> <num>     5 + 3, 10 / 4
//! <unary-op> <num>            sin 90, sqrt 16
//! <command>                   stop, clear, clearhistory, clear history
//! ```
//!
//! Everything else is [`CalcError::InvalidInput`]. Dividing by a literal `0`
//! is [`CalcError::DivisionByZero`]. Results outside the real domain (the
//! square root of a negative number, `tan 90`, overflow) come back as the
//! non-finite or extreme values `f64` produces.
//!
//! Dispatch is pure: no I/O, no state. Recording results is the caller's job.

use crate::error::{CalcError, Result};

pub mod operation;
pub mod token;

use operation::{BinaryOp, Operation};
use token::{tokenize, Keyword, Token};

/// Control commands that do not produce a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Stop,
    /// Wipe the saved history.
    ClearHistory,
}

impl Command {
    pub fn token(self) -> &'static str {
        match self {
            Command::Stop => "stop",
            Command::ClearHistory => "clear history",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    Command(Command),
}

/// Tokens shown in the shell's list of available actions, in display order.
pub fn available_actions() -> Vec<&'static str> {
    Operation::ALL
        .iter()
        .map(|op| op.token())
        .chain([Command::Stop.token(), Command::ClearHistory.token()])
        .collect()
}

/// The form an input line is recorded under in the history.
pub fn normalize(line: &str) -> String {
    line.to_lowercase()
}

pub fn evaluate(line: &str) -> Result<Outcome> {
    let line = normalize(line);

    // "clear history" is the one command spelled with a space.
    if line.contains(' ') && line.replace(' ', "") == "clearhistory" {
        return Ok(Outcome::Command(Command::ClearHistory));
    }

    let tokens = tokenize(&line);
    match tokens.as_slice() {
        [Token::Number { value: a, .. }, Token::Keyword(Keyword::Op(Operation::Binary(op))), Token::Number { value: b, text }] =>
        {
            if *op == BinaryOp::Divide && *text == "0" {
                return Err(CalcError::DivisionByZero);
            }
            Ok(Outcome::Value(op.apply(*a, *b)))
        }
        [Token::Keyword(Keyword::Op(Operation::Unary(op))), Token::Number { value, .. }] => {
            Ok(Outcome::Value(op.apply(*value)))
        }
        [Token::Keyword(Keyword::Command(cmd))] => Ok(Outcome::Command(*cmd)),
        _ => Err(CalcError::InvalidInput(line.clone())),
    }
}
