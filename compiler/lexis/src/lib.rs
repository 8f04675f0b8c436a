//! Lexical analysis for hand-written parsers.
//!
//! Compile a [`Tokenizer`] from an ordered [`PatternSet`], run it over the
//! input, and walk the resulting [`Stream`] with lookahead and consume
//! operations:
//!
//! ```
//! use lexis::{PatternSet, Tokenizer, Want};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Kind { Ident, Num, Ws, Punct }
//!
//! let tokenizer = Tokenizer::new(
//!     &PatternSet::new()
//!         .rule(Kind::Ident, "[a-z]+")
//!         .rule(Kind::Num, "[0-9]+")
//!         .rule(Kind::Ws, r"\s+")
//!         .rule(Kind::Punct, "[=;]"),
//! )?;
//!
//! let mut stream = tokenizer.tokenize("x = 42;")?;
//! stream.ignore(Kind::Ws);
//! let name = stream.consume_value(&[Want::Kind(Kind::Ident)])?.to_owned();
//! stream.consume_value(&[Want::Value("=")])?;
//! let value = stream.consume_value(&[Want::Kind(Kind::Num)])?;
//! assert_eq!((name.as_str(), value), ("x", "42"));
//!
//! let err = stream.consume_value(&[Want::Kind(Kind::Ident)]).unwrap_err();
//! assert_eq!(err.to_string(), "Unexpected ';' on line 1, column 7.");
//! # Ok::<(), lexis::Error>(())
//! ```
//!
//! Set `RUST_LOG=lexis_lexer=debug` and call [`init_tracing`] to see rule
//! compilation and tokenize spans.

use std::sync::Once;

pub use lexis_diagnostic::{coordinates, excerpt};
pub use lexis_ir::{is_contiguous, reconstruct, Token, Want};
pub use lexis_lexer::{ConfigError, LexError, MatchFlags, PatternSet, Tokenizer};
pub use lexis_stream::{Stream, SyntaxError};

/// Any failure raised while configuring, tokenizing, or parsing.
#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// Byte offset into the input, when the error points at one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Config(_) => None,
            Error::Lex(err) => Some(err.offset),
            Error::Syntax(err) => err.offset(),
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
