//! Pattern compilation and the tokenize loop.

use std::hash::Hash;

use lexis_ir::Token;
use lexis_stream::Stream;
use regex_automata::meta::{BuildError, Regex};
use regex_automata::util::captures::Captures;
use regex_automata::{Anchored, Input};

use crate::{ConfigError, LexError, MatchFlags, PatternSet};

/// A compiled rule set.
///
/// All rules are joined into one alternation `(p0)|(p1)|...`. Every match
/// attempt runs over the whole input, anchored at the current offset, so
/// `^`, `\b` and other look-around assertions see the text before it. The
/// tokenizer keeps the capture-group index of each alternative, so groups
/// written inside a fragment do not disturb classification.
///
/// Holds no per-call state: one tokenizer can serve many inputs, from many
/// threads at once.
#[derive(Clone, Debug)]
pub struct Tokenizer<K> {
    regex: Regex,
    pattern: String,
    /// Capture-group index of each rule's alternative, in declaration order.
    groups: Vec<usize>,
    /// Kind of each rule, parallel to `groups`.
    kinds: Vec<K>,
}

impl<K: Copy + Eq + Hash> Tokenizer<K> {
    /// Compile `patterns` with default matching flags.
    pub fn new(patterns: &PatternSet<K>) -> Result<Self, ConfigError> {
        Self::with_flags(patterns, MatchFlags::empty())
    }

    /// Compile `patterns`, applying `flags` to every rule.
    pub fn with_flags(patterns: &PatternSet<K>, flags: MatchFlags) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut groups = Vec::with_capacity(patterns.len());
        let mut kinds = Vec::with_capacity(patterns.len());
        let mut alternatives = Vec::with_capacity(patterns.len());
        // Group 0 is the whole match. Each rule takes the next index, then
        // any groups nested in its fragment follow it.
        let mut next_group = 1;

        for (rule, (kind, fragment)) in patterns.iter().enumerate() {
            let nested = build(fragment, flags)
                .map_err(|source| ConfigError::InvalidRule { rule, source })?
                .captures_len()
                .saturating_sub(1);
            groups.push(next_group);
            kinds.push(*kind);
            // In verbose mode a trailing `# comment` would swallow the `)`.
            if flags.contains(MatchFlags::IGNORE_WHITESPACE) {
                alternatives.push(format!("({fragment}\n)"));
            } else {
                alternatives.push(format!("({fragment})"));
            }
            next_group += 1 + nested;
        }

        let pattern = alternatives.join("|");
        let regex = build(&pattern, flags)?;
        debug_assert_eq!(regex.captures_len(), next_group, "group map out of sync");
        tracing::debug!(rules = kinds.len(), ?flags, "compiled tokenizer");

        Ok(Tokenizer {
            regex,
            pattern,
            groups,
            kinds,
        })
    }

    /// Split `input` into tokens and wrap them in a [`Stream`].
    pub fn tokenize(&self, input: &str) -> Result<Stream<K>, LexError> {
        self.tokenize_list(input).map(Stream::new)
    }

    /// Split `input` into tokens.
    ///
    /// Matching restarts at the end of each token and must begin exactly
    /// there; the text already consumed stays visible to assertions. The
    /// loop stops at the end of input, when nothing matches, or on a
    /// zero-length match; any unconsumed rest is a [`LexError`].
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn tokenize_list(&self, input: &str) -> Result<Vec<Token<K>>, LexError> {
        let mut caps = self.regex.create_captures();
        let mut search = Input::new(input).anchored(Anchored::Yes);
        let mut tokens = Vec::new();
        let mut len = 0;

        while len < input.len() {
            search.set_start(len);
            self.regex.search_captures(&search, &mut caps);
            let Some(whole) = caps.get_match().filter(|m| !m.is_empty()) else {
                break;
            };
            let Some(kind) = self.classify(&caps) else {
                break;
            };
            let Some(text) = input.get(whole.range()) else {
                break;
            };
            tokens.push(Token::new(text, kind, len));
            len = whole.end();
        }

        if len < input.len() {
            tracing::debug!(offset = len, "unmatched input");
            return Err(LexError::at(input, len));
        }

        tracing::debug!(tokens = tokens.len(), "tokenized");
        Ok(tokens)
    }

    /// Kind of the earliest rule whose alternative matched non-empty text.
    fn classify(&self, caps: &Captures) -> Option<K> {
        self.groups
            .iter()
            .zip(&self.kinds)
            .find(|&(&group, _)| caps.get_group(group).is_some_and(|span| !span.is_empty()))
            .map(|(_, &kind)| kind)
    }

    /// The combined pattern handed to the engine.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Rule kinds in declaration order.
    pub fn kinds(&self) -> &[K] {
        &self.kinds
    }
}

fn build(pattern: &str, flags: MatchFlags) -> Result<Regex, BuildError> {
    Regex::builder().syntax(flags.syntax()).build(pattern)
}
