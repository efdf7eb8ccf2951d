//! Parser combinators
//!
//! Parsers are composed into a grammar graph at construction time and run
//! with `parse(&tokens)`. Recursive rules go through [`lazy`]. The combinators
//! do plain recursive descent with no memoization, so recursion depth follows
//! grammar nesting and alternatives that share a prefix re-parse it.

pub mod combinators;
pub mod primitives;
pub mod result;

pub use combinators::{Parser, SeqParser};
pub use primitives::{ignore, lazy, singleton, token};
pub use result::{Found, ParsingFailure, ParsingResult, ParsingSuccess, Seq};
