//! The parser type and its combinators
//!
//! A [`Parser`] is an opaque, cheaply clonable function from a token slice to a
//! [`ParsingResult`]. Combinators build new parsers from existing ones without
//! running anything; work happens only when `parse` is called on the final
//! composed parser.
//!
//! Failures are ordinary values. Every combinator checks and propagates them
//! explicitly, the first failure wins, and nothing is recovered.

use std::rc::Rc;

use crate::lexer::{Token, TokenKind};
use crate::parser::result::{ParsingResult, ParsingSuccess, Seq};

type ParseFn<K, T> = Rc<dyn for<'t> Fn(&'t [Token<K>]) -> ParsingResult<'t, K, T>>;

/// A parser over tokens of type `K` producing values of type `T`
pub struct Parser<K, T> {
    parse_fn: ParseFn<K, T>,
}

impl<K, T> Clone for Parser<K, T> {
    fn clone(&self) -> Self {
        Parser {
            parse_fn: Rc::clone(&self.parse_fn),
        }
    }
}

impl<K: TokenKind, T: 'static> Parser<K, T> {
    /// Wrap a parse function
    pub fn new<F>(parse_fn: F) -> Self
    where
        F: for<'t> Fn(&'t [Token<K>]) -> ParsingResult<'t, K, T> + 'static,
    {
        Parser {
            parse_fn: Rc::new(parse_fn),
        }
    }

    pub fn parse<'t>(&self, tokens: &'t [Token<K>]) -> ParsingResult<'t, K, T> {
        (self.parse_fn)(tokens)
    }

    /// Run `self` then `next` on the leftover tokens, keeping `next`'s value
    pub fn sequence_right<U: 'static>(self, next: Parser<K, U>) -> Parser<K, U> {
        Parser::new(move |tokens| {
            let first = self.parse(tokens)?;
            next.parse(first.rest)
        })
    }

    /// Run `self` then `next` on the leftover tokens, keeping `self`'s value
    pub fn sequence_left<U: 'static>(self, next: Parser<K, U>) -> Parser<K, T> {
        Parser::new(move |tokens| {
            let first = self.parse(tokens)?;
            let second = next.parse(first.rest)?;
            Ok(ParsingSuccess::new(first.value, second.rest))
        })
    }

    /// Run `self` then `next` on the leftover tokens, keeping both values
    pub fn sequence<U: 'static>(self, next: Parser<K, U>) -> SeqParser<K, T, U> {
        let inner = Parser::new(move |tokens| {
            let first = self.parse(tokens)?;
            let second = next.parse(first.rest)?;
            let pair = Seq {
                left: first.value,
                right: second.value,
            };
            Ok(ParsingSuccess::new(pair, second.rest))
        });
        SeqParser { inner }
    }

    /// Try `self`; if it fails, try `other` on the same tokens.
    ///
    /// When both fail, the expected types of both are reported, `self`'s
    /// first, and the offending token is the one `other` stopped at.
    pub fn alt(self, other: Parser<K, T>) -> Parser<K, T> {
        Parser::new(move |tokens| match self.parse(tokens) {
            Ok(success) => Ok(success),
            Err(first) => other.parse(tokens).map_err(|second| first.merge(second)),
        })
    }

    /// Transform the produced value
    pub fn map<U, F>(self, mapper: F) -> Parser<K, U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        Parser::new(move |tokens| {
            let success = self.parse(tokens)?;
            Ok(ParsingSuccess::new(mapper(success.value), success.rest))
        })
    }
}

/// A parser producing a [`Seq`] pair, built by [`Parser::sequence`]
pub struct SeqParser<K, A, B> {
    inner: Parser<K, Seq<A, B>>,
}

impl<K, A, B> Clone for SeqParser<K, A, B> {
    fn clone(&self) -> Self {
        SeqParser {
            inner: self.inner.clone(),
        }
    }
}

impl<K: TokenKind, A: 'static, B: 'static> SeqParser<K, A, B> {
    pub fn parse<'t>(&self, tokens: &'t [Token<K>]) -> ParsingResult<'t, K, Seq<A, B>> {
        self.inner.parse(tokens)
    }

    /// Combine both halves of the pair into a single value
    pub fn map<V, F>(self, mapper: F) -> Parser<K, V>
    where
        V: 'static,
        F: Fn(A, B) -> V + 'static,
    {
        self.inner.map(move |Seq { left, right }| mapper(left, right))
    }

    pub fn into_parser(self) -> Parser<K, Seq<A, B>> {
        self.inner
    }
}

impl<K, A, B> From<SeqParser<K, A, B>> for Parser<K, Seq<A, B>> {
    fn from(seq: SeqParser<K, A, B>) -> Self {
        seq.inner
    }
}
