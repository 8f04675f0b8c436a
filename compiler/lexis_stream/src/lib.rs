//! Token stream with a movable cursor for hand-written parsers.
//!
//! A [`Stream`] wraps a fixed token sequence, a cursor (`position`, starting
//! at -1) and a set of *ignored* kinds that lookahead passes over
//! transparently. All navigation (peeking, consuming, joining, existence
//! checks in both directions) is one scan routine run with different scan
//! options.
//!
//! ```
//! use lexis_ir::{Token, Want};
//! use lexis_stream::Stream;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Kind { Num, Ws, Op }
//!
//! let mut stream = Stream::new(vec![
//!     Token::new("12", Kind::Num, 0),
//!     Token::new(" ", Kind::Ws, 2),
//!     Token::new("+", Kind::Op, 3),
//! ]);
//! stream.ignore(Kind::Ws);
//!
//! assert_eq!(stream.next_value(&[Want::Kind(Kind::Num)]), Some("12"));
//! assert!(stream.is_next(&[Want::Value("+")]));
//! assert_eq!(stream.consume_value(&[Want::Kind(Kind::Op)]), Ok("+"));
//! ```

mod error;
mod stream;

pub use error::SyntaxError;
pub use stream::Stream;
