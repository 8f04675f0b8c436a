//! The scan primitive behind every stream lookup.
//!
//! A scan walks tokens one at a time from the cursor, forward or backward,
//! and classifies each as a *hit* (collected), *transparent* (an ignored
//! kind, passed over) or a *stop*. The options decide which is which:
//!
//! - With an empty wanted set, every token is a hit.
//! - In [`Mode::Match`], a token listed in the wanted set is a hit; an
//!   unlisted token of an ignored kind is transparent; anything else stops.
//! - In [`Mode::Until`], an unlisted token is a hit and the first listed
//!   token stops the scan. Ignored kinds get no special treatment, so they
//!   are collected like everything else.
//!
//! Advancing scans only ever move the cursor forward, to the last hit.

use std::hash::Hash;

use lexis_ir::Want;

use super::Stream;

/// Whether the wanted set names tokens to take or the token to stop before.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Match,
    Until,
}

/// Stop at the first hit, or keep collecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Arity {
    First,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Options for one run of [`Stream::scan`].
///
/// Starts as a non-advancing forward scan collecting every hit; the
/// chained setters switch one option each.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scan<'s, 'w, K> {
    pub wanted: &'s [Want<'w, K>],
    pub mode: Mode,
    pub arity: Arity,
    pub advance: bool,
    pub direction: Direction,
}

impl<'s, 'w, K> Scan<'s, 'w, K> {
    pub const fn new(wanted: &'s [Want<'w, K>]) -> Self {
        Scan {
            wanted,
            mode: Mode::Match,
            arity: Arity::All,
            advance: false,
            direction: Direction::Forward,
        }
    }

    #[must_use]
    pub const fn first(mut self) -> Self {
        self.arity = Arity::First;
        self
    }

    #[must_use]
    pub const fn until(mut self) -> Self {
        self.mode = Mode::Until;
        self
    }

    #[must_use]
    pub const fn advancing(mut self) -> Self {
        self.advance = true;
        self
    }

    #[must_use]
    pub const fn backward(mut self) -> Self {
        self.direction = Direction::Backward;
        self
    }

    /// Only forward scans move the cursor.
    const fn moves_cursor(&self) -> bool {
        self.advance && matches!(self.direction, Direction::Forward)
    }

    const fn step(&self) -> isize {
        match self.direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

impl<K: Copy + Eq + Hash> Stream<K> {
    /// Run a scan and return the indices of its hits, in scan order.
    ///
    /// [`Arity::First`] returns at most one index. An empty result means
    /// nothing was found before a stop or the end of the sequence.
    pub(crate) fn scan(&mut self, scan: &Scan<'_, '_, K>) -> Vec<usize> {
        let mut hits = Vec::new();
        let mut pos = self.position + scan.step();

        loop {
            let Some(idx) = self.index(pos) else {
                // Running off the end with no wanted set consumes the rest,
                // leaving the cursor one past the last token.
                if scan.wanted.is_empty() && scan.moves_cursor() && pos <= self.end() {
                    self.position += 1;
                }
                return hits;
            };
            let token = &self.tokens[idx];
            let kind = token.kind;
            let listed = token.is(scan.wanted);

            if scan.wanted.is_empty() || listed != (scan.mode == Mode::Until) {
                if scan.moves_cursor() {
                    self.position = self.position.max(pos);
                }
                hits.push(idx);
                if scan.arity == Arity::First {
                    return hits;
                }
            } else if scan.mode == Mode::Until || !self.ignored.contains(&kind) {
                return hits;
            }

            pos += scan.step();
        }
    }
}

#[cfg(test)]
mod tests;
