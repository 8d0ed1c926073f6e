//! Error types for the analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Empty input: please provide some text to analyze")]
    EmptyInput,

    #[error("Empty text in row {row}: every row needs text to analyze")]
    EmptyText { row: usize },

    #[error("Missing text column: expected one of text, review, comment (found: {})", available.join(", "))]
    MissingTextColumn { available: Vec<String> },

    #[error("Unreadable input: {0}")]
    UnreadableInput(String),

    #[error("Render failure: {0}")]
    Render(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<csv::Error> for AnalyzerError {
    fn from(err: csv::Error) -> Self {
        AnalyzerError::UnreadableInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
