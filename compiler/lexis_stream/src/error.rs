//! Errors raised by consuming stream operations.

use thiserror::Error;

/// A consuming operation required a token that is not there.
///
/// The `Display` text is part of the public contract and matches the
/// tokenizer's `LexError` format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum SyntaxError {
    /// No significant token remains after the cursor.
    #[error("Unexpected end of string")]
    UnexpectedEnd,
    /// The next significant token is not in the wanted set.
    #[error("Unexpected '{value}' on line {line}, column {column}.")]
    UnexpectedToken {
        value: String,
        offset: usize,
        line: usize,
        column: usize,
    },
}

impl SyntaxError {
    /// Byte offset of the offending token, if there was one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            SyntaxError::UnexpectedEnd => None,
            SyntaxError::UnexpectedToken { offset, .. } => Some(*offset),
        }
    }
}
