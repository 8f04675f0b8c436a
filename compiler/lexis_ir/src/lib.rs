//! Token types shared by the lexis tokenizer and token stream.
//!
//! A [`Token`] is a classified, positioned slice of the original input.
//! [`Want`] names one entry of a wanted set: either a token kind or an
//! exact token value. Both crates above this one (`lexis_lexer` and
//! `lexis_stream`) speak only in these types.

mod token;
mod want;

pub use token::{is_contiguous, reconstruct, Token};
pub use want::Want;
