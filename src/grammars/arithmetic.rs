//! Arithmetic expressions over integers with `+`, `*` and parentheses
//!
//! A complete example of the toolkit: a token enumeration, a lexer, a
//! recursive grammar built with [`lazy`], and an evaluator for the resulting
//! tree.
//!
//! Grammar (right-recursive, `*` binds tighter than `+`):
//!
//! ```text
//! expr := term ('+' expr)?
//! term := atom ('*' term)?
//! atom := Int | '(' expr ')'
//! ```
//!
//! Each rule parses its leading operand once and then looks for the operator,
//! so the work per level of parentheses is constant.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

use crate::lexer::{Lexer, LexingError, PatternError, Token};
use crate::parser::{ignore, lazy, token, Found, Parser, ParsingFailure, ParsingSuccess};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArithToken {
    Int,
    Plus,
    Times,
    LeftParen,
    RightParen,
}

static LEXER: Lazy<Lexer<ArithToken>> =
    Lazy::new(|| build_lexer().expect("arithmetic token patterns are valid"));

fn build_lexer() -> Result<Lexer<ArithToken>, PatternError> {
    let mut lexer = Lexer::new();
    lexer.add_regex(ArithToken::Int, r"\d+")?;
    lexer
        .add_str(ArithToken::Plus, "+")
        .add_str(ArithToken::Times, "*")
        .add_str(ArithToken::LeftParen, "(")
        .add_str(ArithToken::RightParen, ")");
    lexer.skip_regex(r"\s+")?;
    Ok(lexer)
}

/// The shared arithmetic lexer
pub fn lexer() -> &'static Lexer<ArithToken> {
    &LEXER
}

/// Expression tree. Integer literals keep their source text until evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Int(String),
    Plus(Box<Expr>, Box<Expr>),
    Times(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn plus(left: Expr, right: Expr) -> Expr {
        Expr::Plus(Box::new(left), Box::new(right))
    }

    fn times(left: Expr, right: Expr) -> Expr {
        Expr::Times(Box::new(left), Box::new(right))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(text) => write!(f, "{}", text),
            Expr::Plus(left, right) => write!(f, "({} + {})", left, right),
            Expr::Times(left, right) => write!(f, "({} * {})", left, right),
        }
    }
}

/// expr := term ('+' expr)?
pub fn expr() -> Parser<ArithToken, Expr> {
    term()
        .sequence(optional(ignore(ArithToken::Plus).sequence_right(lazy(expr))))
        .map(|left, right| match right {
            Some(right) => Expr::plus(left, right),
            None => left,
        })
}

fn term() -> Parser<ArithToken, Expr> {
    atom()
        .sequence(optional(ignore(ArithToken::Times).sequence_right(lazy(term))))
        .map(|left, right| match right {
            Some(right) => Expr::times(left, right),
            None => left,
        })
}

fn atom() -> Parser<ArithToken, Expr> {
    let int = token(ArithToken::Int, |text| Expr::Int(text.to_string()));
    let parenthesized = ignore(ArithToken::LeftParen)
        .sequence_right(lazy(expr))
        .sequence_left(ignore(ArithToken::RightParen));
    int.alt(parenthesized)
}

/// `parser` or nothing; never fails and consumes no tokens when `parser` fails
fn optional<T: 'static>(parser: Parser<ArithToken, T>) -> Parser<ArithToken, Option<T>> {
    let nothing = Parser::new(|tokens| Ok(ParsingSuccess::new(None, tokens)));
    parser.map(Some).alt(nothing)
}

/// Errors from evaluating an [`Expr`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    InvalidInteger(String),
    Overflow,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidInteger(text) => write!(f, "Invalid integer literal: {}", text),
            EvalError::Overflow => write!(f, "Arithmetic overflow"),
        }
    }
}

impl std::error::Error for EvalError {}

pub fn eval(expr: &Expr) -> Result<i64, EvalError> {
    match expr {
        Expr::Int(text) => text
            .parse()
            .map_err(|_| EvalError::InvalidInteger(text.clone())),
        Expr::Plus(left, right) => eval(left)?
            .checked_add(eval(right)?)
            .ok_or(EvalError::Overflow),
        Expr::Times(left, right) => eval(left)?
            .checked_mul(eval(right)?)
            .ok_or(EvalError::Overflow),
    }
}

/// Any failure on the way from source text to a value
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    Lexing(LexingError),
    Parsing(ParsingFailure<ArithToken>),
    /// The expression parsed but tokens were left over
    TrailingInput(Token<ArithToken>),
    Eval(EvalError),
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::Lexing(err) => write!(f, "{}", err),
            ArithmeticError::Parsing(failure) => write!(f, "{}", failure),
            ArithmeticError::TrailingInput(token) => write!(
                f,
                "Expected end of input, got {}",
                Found::Token(token.clone())
            ),
            ArithmeticError::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ArithmeticError {}

impl From<LexingError> for ArithmeticError {
    fn from(err: LexingError) -> Self {
        ArithmeticError::Lexing(err)
    }
}

impl From<ParsingFailure<ArithToken>> for ArithmeticError {
    fn from(failure: ParsingFailure<ArithToken>) -> Self {
        ArithmeticError::Parsing(failure)
    }
}

impl From<EvalError> for ArithmeticError {
    fn from(err: EvalError) -> Self {
        ArithmeticError::Eval(err)
    }
}

/// Parse a whole token sequence as one expression
pub fn parse_tokens(tokens: &[Token<ArithToken>]) -> Result<Expr, ArithmeticError> {
    let success = expr().parse(tokens)?;
    match success.rest.first() {
        Some(extra) => Err(ArithmeticError::TrailingInput(extra.clone())),
        None => Ok(success.value),
    }
}

pub fn parse_source(file_name: &str, source: &str) -> Result<Expr, ArithmeticError> {
    let tokens = lexer().lex(file_name, source)?;
    parse_tokens(&tokens)
}

/// Lex, parse and evaluate `source`
pub fn evaluate(file_name: &str, source: &str) -> Result<i64, ArithmeticError> {
    let tree = parse_source(file_name, source)?;
    Ok(eval(&tree)?)
}
