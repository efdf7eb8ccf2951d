//! Token definitions shared by the lexer and the parser combinators
//!
//! Token types are a closed enumeration supplied by the grammar author. Any
//! `Copy + Eq + Hash + Debug` type qualifies through the blanket
//! [`TokenKind`] impl, so a plain `#[derive(...)] enum` is all a grammar needs.

use serde::Serialize;
use std::fmt;
use std::hash::Hash;

use crate::lexer::location::Location;

/// Marker for types usable as token type tags
pub trait TokenKind: Copy + Eq + Hash + fmt::Debug + 'static {}

impl<K> TokenKind for K where K: Copy + Eq + Hash + fmt::Debug + 'static {}

/// A typed lexeme: the token type, the exact matched text and where it started
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<K> {
    pub kind: K,
    pub value: String,
    pub location: Location,
}

impl<K: TokenKind> Token<K> {
    pub fn new(kind: K, value: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            value: value.into(),
            location,
        }
    }

    /// Check whether this token has the given type
    pub fn is(&self, kind: K) -> bool {
        self.kind == kind
    }
}

impl<K: TokenKind> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}: {:?}]", self.kind, self.value)
    }
}
