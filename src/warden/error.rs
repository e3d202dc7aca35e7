use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Failed to read field '{option}' in section [{section}]")]
    ConfigFieldMissing { section: String, option: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Malformed config at line {line}: {content}")]
    ConfigParse { line: usize, content: String },

    #[error("Storage unavailable at {}: {}", .path.display(), .source)]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalcError {
    pub(crate) fn storage(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| CalcError::Storage { path, source }
    }

    /// Errors the shell reports and then keeps looping on. Everything else is fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput(_)
                | CalcError::DivisionByZero
                | CalcError::ConfigFieldMissing { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
