use super::operation::Operation;
use super::Command;

/// Reserved words: numeric operations and control commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Op(Operation),
    Command(Command),
}

/// One space-separated word of an input line, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A numeric literal. `text` is kept for the literal-zero division guard.
    Number { value: f64, text: &'a str },
    Keyword(Keyword),
    Unknown(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(word: &'a str) -> Self {
        if let Some(value) = parse_number(word) {
            return Token::Number { value, text: word };
        }
        if let Ok(op) = word.parse::<Operation>() {
            return Token::Keyword(Keyword::Op(op));
        }
        match word.to_lowercase().as_str() {
            "stop" => Token::Keyword(Keyword::Command(Command::Stop)),
            "clear" | "clearhistory" => Token::Keyword(Keyword::Command(Command::ClearHistory)),
            _ => Token::Unknown(word),
        }
    }
}

/// Splits on single spaces. Consecutive spaces yield empty, unknown tokens.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    line.split(' ').map(Token::classify).collect()
}

/// A word counts as a number when it contains a digit and parses as `f64`.
/// This keeps words such as `inf` and `nan` out.
fn parse_number(word: &str) -> Option<f64> {
    if !word.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    word.parse().ok()
}
