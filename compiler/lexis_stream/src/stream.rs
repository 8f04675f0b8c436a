//! The token stream and its public navigation operations.

mod scan;

use std::fmt;
use std::hash::Hash;

use lexis_diagnostic::coordinates;
use lexis_ir::{reconstruct, Token, Want};
use rustc_hash::FxHashSet;

use crate::SyntaxError;
use scan::Scan;

/// Mutable cursor over a fixed token sequence.
///
/// `position` ranges over `-1..=len`: `-1` before anything is consumed,
/// `0..len` sitting on a token, `len` after a wildcard read ran off the end.
/// Consuming operations never move it backward; only [`reset`](Self::reset)
/// does.
///
/// Ignored kinds stay in the sequence. Lookahead in match mode passes over
/// them, while [`current_token`](Self::current_token) and
/// [`is_current`](Self::is_current) still see them when the cursor sits on
/// one.
#[derive(Clone)]
pub struct Stream<K> {
    tokens: Vec<Token<K>>,
    position: isize,
    ignored: FxHashSet<K>,
}

impl<K: Copy + Eq + Hash> Stream<K> {
    /// Create a stream positioned before the first token, ignoring nothing.
    pub fn new(tokens: Vec<Token<K>>) -> Self {
        Stream {
            tokens,
            position: -1,
            ignored: FxHashSet::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────

    /// Cursor position: `-1` before the first token, `len()` past the last.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    #[inline]
    pub fn tokens(&self) -> &[Token<K>] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether no token remains after the cursor.
    pub fn is_exhausted(&self) -> bool {
        self.position + 1 >= self.end()
    }

    /// Move the cursor back before the first token.
    pub fn reset(&mut self) -> &mut Self {
        self.position = -1;
        self
    }

    pub fn into_tokens(self) -> Vec<Token<K>> {
        self.tokens
    }

    // ─────────────────────────────────────────────────────────────────────
    // Ignored kinds
    // ─────────────────────────────────────────────────────────────────────

    /// Add a kind to the ignored set.
    pub fn ignore(&mut self, kind: K) -> &mut Self {
        self.ignored.insert(kind);
        self
    }

    /// Replace the ignored set.
    pub fn set_ignored(&mut self, kinds: impl IntoIterator<Item = K>) -> &mut Self {
        self.ignored = kinds.into_iter().collect();
        self
    }

    pub fn is_ignored(&self, kind: &K) -> bool {
        self.ignored.contains(kind)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Direct access
    // ─────────────────────────────────────────────────────────────────────

    /// Token under the cursor, ignored or not.
    pub fn current_token(&self) -> Option<&Token<K>> {
        self.index(self.position).map(|idx| &self.tokens[idx])
    }

    pub fn current_value(&self) -> Option<&str> {
        self.current_token().map(|t| t.value.as_str())
    }

    /// Whether the token under the cursor is in `wanted`.
    ///
    /// An empty `wanted` set never matches here.
    pub fn is_current(&self, wanted: &[Want<'_, K>]) -> bool {
        self.current_token().is_some_and(|t| t.is(wanted))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lookahead and consumption
    // ─────────────────────────────────────────────────────────────────────

    /// Advance to the next token in `wanted` (any token if empty),
    /// passing over ignored kinds. Returns `None` without moving when the
    /// next significant token is not wanted.
    pub fn next_token(&mut self, wanted: &[Want<'_, K>]) -> Option<&Token<K>> {
        let hit = self.first_hit(&Scan::new(wanted).first().advancing());
        hit.map(|idx| &self.tokens[idx])
    }

    /// Like [`next_token`](Self::next_token), returning the token text.
    pub fn next_value(&mut self, wanted: &[Want<'_, K>]) -> Option<&str> {
        self.next_token(wanted).map(|t| t.value.as_str())
    }

    /// Advance over every consecutive wanted token (ignored kinds in
    /// between are skipped, not collected).
    pub fn next_all(&mut self, wanted: &[Want<'_, K>]) -> Vec<&Token<K>> {
        let hits = self.scan(&Scan::new(wanted).advancing());
        self.project(&hits)
    }

    /// Advance over every token before the first one in `wanted`,
    /// ignored kinds included.
    pub fn next_until(&mut self, wanted: &[Want<'_, K>]) -> Vec<&Token<K>> {
        let hits = self.scan(&Scan::new(wanted).until().advancing());
        self.project(&hits)
    }

    /// [`next_all`](Self::next_all), concatenated.
    pub fn join_all(&mut self, wanted: &[Want<'_, K>]) -> String {
        let hits = self.scan(&Scan::new(wanted).advancing());
        self.join(&hits)
    }

    /// [`next_until`](Self::next_until), concatenated.
    pub fn join_until(&mut self, wanted: &[Want<'_, K>]) -> String {
        let hits = self.scan(&Scan::new(wanted).until().advancing());
        self.join(&hits)
    }

    /// Whether [`next_token`](Self::next_token) would succeed, without
    /// moving the cursor.
    pub fn is_next(&mut self, wanted: &[Want<'_, K>]) -> bool {
        self.first_hit(&Scan::new(wanted).first()).is_some()
    }

    /// Whether a wanted token sits before the cursor, looking backward and
    /// passing over ignored kinds.
    pub fn is_prev(&mut self, wanted: &[Want<'_, K>]) -> bool {
        self.first_hit(&Scan::new(wanted).first().backward()).is_some()
    }

    /// [`next_token`](Self::next_token) that fails when nothing matches.
    ///
    /// The error names the next significant token and its line and column,
    /// or reports the end of input.
    pub fn consume_token(&mut self, wanted: &[Want<'_, K>]) -> Result<&Token<K>, SyntaxError> {
        match self.first_hit(&Scan::new(wanted).first().advancing()) {
            Some(idx) => Ok(&self.tokens[idx]),
            None => {
                let err = self.unexpected();
                tracing::trace!(position = self.position, %err, "consume failed");
                Err(err)
            }
        }
    }

    pub fn consume_value(&mut self, wanted: &[Want<'_, K>]) -> Result<&str, SyntaxError> {
        self.consume_token(wanted).map(|t| t.value.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    /// Token count as a cursor value.
    fn end(&self) -> isize {
        isize::try_from(self.tokens.len()).unwrap_or(isize::MAX)
    }

    /// Convert a cursor value to a token index, if one exists there.
    fn index(&self, pos: isize) -> Option<usize> {
        usize::try_from(pos).ok().filter(|&idx| idx < self.tokens.len())
    }

    fn first_hit(&mut self, scan: &Scan<'_, '_, K>) -> Option<usize> {
        self.scan(scan).first().copied()
    }

    fn project(&self, hits: &[usize]) -> Vec<&Token<K>> {
        hits.iter().map(|&idx| &self.tokens[idx]).collect()
    }

    fn join(&self, hits: &[usize]) -> String {
        hits.iter().map(|&idx| self.tokens[idx].value.as_str()).collect()
    }

    /// Build the error for a failed `consume_token()` call.
    #[cold]
    #[inline(never)]
    fn unexpected(&self) -> SyntaxError {
        let start = usize::try_from(self.position + 1).unwrap_or_default();
        let offending = self
            .tokens
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, t)| !self.ignored.contains(&t.kind))
            .map(|(idx, _)| idx);

        let Some(idx) = offending else {
            return SyntaxError::UnexpectedEnd;
        };
        let token = &self.tokens[idx];
        let text = reconstruct(&self.tokens[..=idx]);
        let (line, column) = coordinates(&text, token.offset);
        SyntaxError::UnexpectedToken {
            value: token.value.clone(),
            offset: token.offset,
            line,
            column,
        }
    }
}

impl<K: Copy + Eq + Hash> From<Vec<Token<K>>> for Stream<K> {
    fn from(tokens: Vec<Token<K>>) -> Self {
        Stream::new(tokens)
    }
}

impl<K: fmt::Debug> fmt::Debug for Stream<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("position", &self.position)
            .field("len", &self.tokens.len())
            .field("ignored", &self.ignored)
            .finish()
    }
}
