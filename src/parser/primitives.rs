//! Leaf parsers built directly from a token type
//!
//! [`token`], [`singleton`] and [`ignore`] share the same matching rule: the
//! head token must have the requested type. They differ only in what they
//! produce. [`lazy`] defers building a parser until parse time, which is how
//! recursive grammar rules are written.

use crate::lexer::{Token, TokenKind};
use crate::parser::combinators::Parser;
use crate::parser::result::{Found, ParsingFailure, ParsingSuccess};

/// Split off the head token if it has type `kind`
fn expect_head<K: TokenKind>(
    kind: K,
    tokens: &[Token<K>],
) -> Result<(&Token<K>, &[Token<K>]), ParsingFailure<K>> {
    match tokens.split_first() {
        Some((head, rest)) if head.kind == kind => Ok((head, rest)),
        _ => Err(ParsingFailure::new(vec![kind], Found::at(tokens))),
    }
}

/// Match one token of type `kind` and convert its text with `mapper`
pub fn token<K, T, F>(kind: K, mapper: F) -> Parser<K, T>
where
    K: TokenKind,
    T: 'static,
    F: Fn(&str) -> T + 'static,
{
    Parser::new(move |tokens| {
        let (head, rest) = expect_head(kind, tokens)?;
        Ok(ParsingSuccess::new(mapper(&head.value), rest))
    })
}

/// Match one token of type `kind` and produce a copy of `value`
///
/// For punctuation and keywords whose text carries no payload.
pub fn singleton<K, T>(kind: K, value: T) -> Parser<K, T>
where
    K: TokenKind,
    T: Clone + 'static,
{
    Parser::new(move |tokens| {
        let (_, rest) = expect_head(kind, tokens)?;
        Ok(ParsingSuccess::new(value.clone(), rest))
    })
}

/// Match one token of type `kind` and discard it
pub fn ignore<K: TokenKind>(kind: K) -> Parser<K, ()> {
    Parser::new(move |tokens| {
        let (_, rest) = expect_head(kind, tokens)?;
        Ok(ParsingSuccess::new((), rest))
    })
}

/// Build the real parser with `supplier` each time this one runs
///
/// Lets a rule refer to itself, or to a sibling defined later, without
/// recursing while the grammar is being built. The supplier is not cached.
pub fn lazy<K, T, F>(supplier: F) -> Parser<K, T>
where
    K: TokenKind,
    T: 'static,
    F: Fn() -> Parser<K, T> + 'static,
{
    Parser::new(move |tokens| {
        let parser = supplier();
        parser.parse(tokens)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Location;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        Word,
        Open,
        Close,
    }

    fn lex(pairs: &[(Kind, &str)]) -> Vec<Token<Kind>> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (kind, value))| Token::new(*kind, *value, Location::new("t", 1, i + 1)))
            .collect()
    }

    #[test]
    fn test_token_on_empty_input() {
        let failure = token(Kind::Word, str::to_uppercase).parse(&[]).unwrap_err();
        assert_eq!(failure.expected, vec![Kind::Word]);
        assert_eq!(failure.got, Found::EndOfInput);
    }

    #[test]
    fn test_token_maps_text() {
        let tokens = lex(&[(Kind::Word, "abc"), (Kind::Open, "(")]);
        let result = token(Kind::Word, str::to_uppercase).parse(&tokens).unwrap();
        assert_eq!(result.value, "ABC");
        assert_eq!(result.rest, &tokens[1..]);
    }

    #[test]
    fn test_token_mismatch_reports_head() {
        let tokens = lex(&[(Kind::Open, "("), (Kind::Word, "abc")]);
        let failure = token(Kind::Word, str::to_owned).parse(&tokens).unwrap_err();
        assert_eq!(failure.expected, vec![Kind::Word]);
        assert_eq!(failure.got, Found::Token(tokens[0].clone()));
    }

    #[test]
    fn test_singleton_ignores_text() {
        let tokens = lex(&[(Kind::Open, "(")]);
        let result = singleton(Kind::Open, 'x').parse(&tokens).unwrap();
        assert_eq!(result.value, 'x');
        assert!(result.rest.is_empty());

        let failure = singleton(Kind::Close, 'x').parse(&tokens).unwrap_err();
        assert_eq!(failure.expected, vec![Kind::Close]);
    }

    #[test]
    fn test_ignore() {
        let tokens = lex(&[(Kind::Close, ")")]);
        assert!(ignore(Kind::Close).parse(&tokens).unwrap().rest.is_empty());
        assert_eq!(
            ignore(Kind::Close).parse(&[]).unwrap_err().got,
            Found::EndOfInput
        );
    }

    #[test]
    fn test_lazy_calls_supplier_on_every_parse() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let parser = lazy(move || {
            counter.set(counter.get() + 1);
            ignore(Kind::Word)
        });
        assert_eq!(calls.get(), 0);

        let tokens = lex(&[(Kind::Word, "a")]);
        parser.parse(&tokens).unwrap();
        parser.parse(&tokens).unwrap();
        assert_eq!(calls.get(), 2);
    }

    /// nested := Word | '(' nested ')'
    fn nested() -> Parser<Kind, usize> {
        singleton(Kind::Word, 0).alt(
            ignore(Kind::Open)
                .sequence_right(lazy(nested))
                .sequence_left(ignore(Kind::Close))
                .map(|depth| depth + 1),
        )
    }

    #[test]
    fn test_lazy_self_reference() {
        let mut pairs = vec![(Kind::Open, "("); 60];
        pairs.push((Kind::Word, "x"));
        pairs.extend(vec![(Kind::Close, ")"); 60]);
        let tokens = lex(&pairs);

        let result = nested().parse(&tokens).unwrap();
        assert_eq!(result.value, 60);
        assert!(result.rest.is_empty());
    }

    #[test]
    fn test_lazy_unbalanced() {
        let tokens = lex(&[(Kind::Open, "("), (Kind::Word, "x")]);
        let failure = nested().parse(&tokens).unwrap_err();
        assert_eq!(failure.expected, vec![Kind::Word, Kind::Close]);
        assert_eq!(failure.got, Found::EndOfInput);
    }
}
