//! Parse outcomes
//!
//! Every parser returns a [`ParsingResult`]: either a [`ParsingSuccess`]
//! carrying the produced value and the unconsumed suffix of the input, or a
//! [`ParsingFailure`] listing the token types that were expected and what was
//! found instead.

use serde::Serialize;
use std::fmt;

use crate::lexer::{Token, TokenKind};

/// Result of running a parser over a token slice
pub type ParsingResult<'t, K, T> = Result<ParsingSuccess<'t, K, T>, ParsingFailure<K>>;

/// A produced value and the tokens left after producing it
///
/// `rest` is always a suffix of the slice handed to `parse`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingSuccess<'t, K, T> {
    pub value: T,
    pub rest: &'t [Token<K>],
}

impl<'t, K, T> ParsingSuccess<'t, K, T> {
    pub fn new(value: T, rest: &'t [Token<K>]) -> Self {
        Self { value, rest }
    }
}

/// What a parser found where it expected something else
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Found<K> {
    Token(Token<K>),
    EndOfInput,
}

impl<K: TokenKind> Found<K> {
    /// The head of `tokens`, or end of input if there is none
    pub fn at(tokens: &[Token<K>]) -> Self {
        match tokens.first() {
            Some(token) => Found::Token(token.clone()),
            None => Found::EndOfInput,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Found::EndOfInput)
    }

    pub fn token(&self) -> Option<&Token<K>> {
        match self {
            Found::Token(token) => Some(token),
            Found::EndOfInput => None,
        }
    }
}

impl<K: TokenKind> fmt::Display for Found<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(token) => write!(f, "{} at {}", token, token.location),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Token types tried at the failing point, in the order they were tried
///
/// Duplicates are kept: alternatives that try the same type twice list it twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsingFailure<K> {
    pub expected: Vec<K>,
    pub got: Found<K>,
}

impl<K: TokenKind> ParsingFailure<K> {
    pub fn new(expected: Vec<K>, got: Found<K>) -> Self {
        Self { expected, got }
    }

    /// Combine the failures of two alternatives tried at the same position.
    ///
    /// Expectations are concatenated; `got` is taken from `later`.
    pub fn merge(mut self, later: ParsingFailure<K>) -> Self {
        self.expected.extend(later.expected);
        Self {
            expected: self.expected,
            got: later.got,
        }
    }
}

impl<K: TokenKind> fmt::Display for ParsingFailure<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected {:?}, got {}", self.expected, self.got)
    }
}

impl<K: TokenKind> std::error::Error for ParsingFailure<K> {}

/// Pair of values produced by [`Parser::sequence`](crate::parser::Parser::sequence)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seq<A, B> {
    pub left: A,
    pub right: B,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Location;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        A,
        B,
    }

    fn tok(kind: Kind, value: &str) -> Token<Kind> {
        Token::new(kind, value, Location::new("f", 1, 4))
    }

    #[test]
    fn test_found_at() {
        assert!(Found::<Kind>::at(&[]).is_end_of_input());
        let tokens = vec![tok(Kind::B, "b"), tok(Kind::A, "a")];
        assert_eq!(Found::at(&tokens).token(), Some(&tokens[0]));
    }

    #[test]
    fn test_merge_keeps_order_and_duplicates() {
        let first = ParsingFailure::new(vec![Kind::A, Kind::B], Found::EndOfInput);
        let second = ParsingFailure::new(vec![Kind::A], Found::Token(tok(Kind::B, "b")));

        let merged = first.merge(second);
        assert_eq!(merged.expected, vec![Kind::A, Kind::B, Kind::A]);
        assert_eq!(merged.got, Found::Token(tok(Kind::B, "b")));
    }

    #[test]
    fn test_display() {
        let failure = ParsingFailure::new(vec![Kind::A], Found::Token(tok(Kind::B, "b")));
        assert_eq!(failure.to_string(), r#"Expected [A], got [B: "b"] at f:1:4"#);

        let failure: ParsingFailure<Kind> = ParsingFailure::new(vec![Kind::B], Found::EndOfInput);
        assert_eq!(failure.to_string(), "Expected [B], got end of input");
    }
}
