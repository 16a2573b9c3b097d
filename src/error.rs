//! Errors raised by the letter pool.

use thiserror::Error;

/// Everything that can go wrong when talking to a [`LetterPool`](crate::LetterPool).
#[derive(Error, Debug)]
pub enum PoolError {
    /// The symbol is not one of the 26 upper case letters
    #[error("'{0}' is not a letter of the alphabet (expected A to Z)")]
    UnknownLetter(char),

    /// The pool could not be rendered as JSON
    #[error("Failed to render the letter pool: {0}")]
    Dump(#[from] serde_json::Error),

    /// The rendered JSON was not valid UTF-8
    #[error("Letter pool dump is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;
