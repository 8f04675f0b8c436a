//! Tokenizer error types.

use lexis_diagnostic::{coordinates, excerpt};
use regex_automata::meta::BuildError;
use thiserror::Error;

/// Input contains text no rule matches.
///
/// Raised once, at the first unmatched offset. The `Display` text is part
/// of the public contract: `Unexpected '<excerpt>' on line L, column C.`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("Unexpected '{excerpt}' on line {line}, column {column}.")]
pub struct LexError {
    /// Up to ten characters of the unmatched text, newlines escaped.
    pub excerpt: String,
    /// Byte offset of the first unmatched byte.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl LexError {
    /// Describe the unmatched text of `input` starting at `offset`.
    pub fn at(input: &str, offset: usize) -> Self {
        let (line, column) = coordinates(input, offset);
        LexError {
            excerpt: excerpt(input, offset),
            offset,
            line,
            column,
        }
    }
}

/// A pattern set that cannot be compiled.
///
/// Detected when the tokenizer is built, never deferred to `tokenize`.
#[derive(Clone, Debug, Error)]
pub enum ConfigError {
    #[error("pattern set has no rules")]
    Empty,
    #[error("unknown matching flag '{0}'")]
    UnknownFlag(char),
    /// One rule's fragment is not a valid expression on its own.
    #[error("invalid pattern for rule {rule}: {source}")]
    InvalidRule {
        /// Zero-based position of the rule in its pattern set.
        rule: usize,
        #[source]
        source: BuildError,
    },
    /// The rules are valid one by one but their alternation is not
    /// (for example, it exceeds the engine's size limit).
    #[error("invalid combined pattern: {0}")]
    InvalidPattern(#[from] BuildError),
}
