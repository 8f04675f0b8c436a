//! Matching-engine flags applied to the combined pattern.

use std::str::FromStr;

use bitflags::bitflags;
use regex_automata::util::syntax;

use crate::ConfigError;

bitflags! {
    /// Options for the combined pattern, parsed from a flag string such as
    /// `"i"` or `"ms"`.
    ///
    /// | Letter | Flag |
    /// |---|---|
    /// | `i` | [`CASE_INSENSITIVE`](Self::CASE_INSENSITIVE) |
    /// | `m` | [`MULTI_LINE`](Self::MULTI_LINE) |
    /// | `s` | [`DOT_MATCHES_NEW_LINE`](Self::DOT_MATCHES_NEW_LINE) |
    /// | `x` | [`IGNORE_WHITESPACE`](Self::IGNORE_WHITESPACE) |
    /// | `U` | [`SWAP_GREED`](Self::SWAP_GREED) |
    /// | `u` | [`UNICODE`](Self::UNICODE) |
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct MatchFlags: u8 {
        const CASE_INSENSITIVE = 1 << 0;
        /// `^` and `$` match at line boundaries.
        const MULTI_LINE = 1 << 1;
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        /// Whitespace and `#` comments in patterns are ignored.
        const IGNORE_WHITESPACE = 1 << 3;
        /// Quantifiers are lazy by default and greedy with `?`.
        const SWAP_GREED = 1 << 4;
        /// Accepted for compatibility; Unicode matching is always on.
        const UNICODE = 1 << 5;
    }
}

impl MatchFlags {
    /// Parser configuration carrying these flags.
    pub(crate) fn syntax(self) -> syntax::Config {
        syntax::Config::new()
            .case_insensitive(self.contains(Self::CASE_INSENSITIVE))
            .multi_line(self.contains(Self::MULTI_LINE))
            .dot_matches_new_line(self.contains(Self::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(self.contains(Self::IGNORE_WHITESPACE))
            .swap_greed(self.contains(Self::SWAP_GREED))
            .unicode(true)
    }
}

impl FromStr for MatchFlags {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().try_fold(MatchFlags::empty(), |flags, letter| {
            let flag = match letter {
                'i' => MatchFlags::CASE_INSENSITIVE,
                'm' => MatchFlags::MULTI_LINE,
                's' => MatchFlags::DOT_MATCHES_NEW_LINE,
                'x' => MatchFlags::IGNORE_WHITESPACE,
                'U' => MatchFlags::SWAP_GREED,
                'u' => MatchFlags::UNICODE,
                other => return Err(ConfigError::UnknownFlag(other)),
            };
            Ok(flags | flag)
        })
    }
}
