//! Error types for scenario loading.

use thiserror::Error;

/// Errors raised while reading and validating a scenario file.
///
/// `Parse` carries the 1-based line number of the offending record so a bad
/// line in a large scenario can be found without bisecting the file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid scenario header: {0}")]
    Header(String),

    #[error("invalid agent record at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("scenario declares {expected} agents but only {got} record(s) are present")]
    Count { expected: usize, got: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, InputError>`.
pub type InputResult<T> = Result<T, InputError>;
