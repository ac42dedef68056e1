//! Custom error types for the ota-dict crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum OtaError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The dictionary source does not exist.
    #[error("Dictionary source not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A byte sequence that is not valid UTF-8.
    #[error("Invalid UTF-8 at byte {offset}: {reason}")]
    InvalidUtf8 { offset: u64, reason: &'static str },

    /// The stream ended in the middle of a multi-byte character.
    #[error("Stream ended inside a UTF-8 sequence starting at byte {offset}")]
    TruncatedUtf8 { offset: u64 },

    /// A dictionary line that does not follow `word: meaning[, meaning]*`.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A word or meaning that cannot be written back and read unchanged.
    #[error("Value {value:?} cannot be stored: {reason}")]
    InvalidValue { value: String, reason: &'static str },
}

/// A convenience `Result` type alias using the crate's `OtaError` type.
pub type Result<T> = std::result::Result<T, OtaError>;
