//! The token value type.

use std::fmt;

use crate::Want;

/// A classified, positioned substring produced by the tokenizer.
///
/// `offset` is a byte index into the original input. Tokens are immutable
/// once built; streams hold them by value in a read-only sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<K> {
    /// Exact matched text. Never empty for a token produced by lexing.
    pub value: String,
    /// Rule that produced this token. `()` for untyped pattern sets.
    pub kind: K,
    /// Byte offset of the first byte of `value` in the input.
    pub offset: usize,
}

impl<K> Token<K> {
    #[inline]
    pub fn new(value: impl Into<String>, kind: K, offset: usize) -> Self {
        Token {
            value: value.into(),
            kind,
            offset,
        }
    }

    /// Byte length of the token text.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Byte offset one past the last byte of this token.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.value.len()
    }

    #[inline]
    pub fn is_value(&self, value: &str) -> bool {
        self.value == value
    }
}

impl<K: PartialEq> Token<K> {
    #[inline]
    pub fn is_kind(&self, kind: &K) -> bool {
        self.kind == *kind
    }

    /// Whether the token's kind or value appears in `wanted`.
    ///
    /// An empty `wanted` slice matches nothing here; "match anything"
    /// is a stream-level rule, not a token-level one.
    pub fn is(&self, wanted: &[Want<'_, K>]) -> bool {
        wanted.iter().any(|w| w.admits(&self.kind, &self.value))
    }
}

impl<K: fmt::Debug> fmt::Debug for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.value, self.offset)
    }
}

/// Concatenate token values back into the text they were cut from.
pub fn reconstruct<K>(tokens: &[Token<K>]) -> String {
    let mut text = String::with_capacity(tokens.iter().map(Token::len).sum());
    for token in tokens {
        text.push_str(&token.value);
    }
    text
}

/// Whether the tokens tile their source without gaps, starting at offset 0.
pub fn is_contiguous<K>(tokens: &[Token<K>]) -> bool {
    let mut expected = 0;
    for token in tokens {
        if token.offset != expected {
            return false;
        }
        expected = token.end();
    }
    true
}
