//! Regex-driven tokenizer.
//!
//! A [`Tokenizer`] is compiled once from an ordered [`PatternSet`] and then
//! reused for any number of inputs. Each rule becomes one alternative of a
//! single pattern, searched anchored at the current offset; the first
//! declared rule that matches there wins, regardless of match length.
//!
//! ```
//! use lexis_lexer::{PatternSet, Tokenizer};
//! use lexis_ir::Want;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Kind { Num, Ws, Op }
//!
//! let tokenizer = Tokenizer::new(
//!     &PatternSet::new()
//!         .rule(Kind::Num, "[0-9]+")
//!         .rule(Kind::Ws, r"\s+")
//!         .rule(Kind::Op, r"[+\-]"),
//! )?;
//!
//! let mut stream = tokenizer.tokenize("12 + 3")?;
//! stream.ignore(Kind::Ws);
//! assert_eq!(stream.join_all(&[Want::Kind(Kind::Num), Want::Kind(Kind::Op)]), "12+3");
//!
//! let err = tokenizer.tokenize("12 + x").unwrap_err();
//! assert_eq!(err.to_string(), "Unexpected 'x' on line 1, column 6.");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod flags;
mod patterns;
mod tokenizer;

pub use error::{ConfigError, LexError};
pub use flags::MatchFlags;
pub use patterns::PatternSet;
pub use tokenizer::Tokenizer;
