//! Position helpers for lexis error messages.
//!
//! Both error kinds raised by lexis (`LexError` from the tokenizer and
//! `SyntaxError` from the stream) point at a byte offset and render it as a
//! 1-based line and column. This crate owns that computation so the two
//! sides always agree.
//!
//! Columns are counted in bytes from the last newline, not in characters.

mod coordinates;
mod excerpt;

pub use coordinates::coordinates;
pub use excerpt::{excerpt, EXCERPT_CHARS};
