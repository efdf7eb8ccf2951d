//! # combilex
//!
//! A small lexing and parsing toolkit: a table-driven [`Lexer`] that turns text
//! into typed tokens, and parser combinators that compose token consumers into
//! recursive-descent grammars.
//!
//! ```text
//! source text -> Lexer::lex -> Vec<Token<K>> -> Parser::parse -> ParsingResult
//! ```
//!
//! See [`grammars::arithmetic`] for a complete grammar.

pub mod config;
pub mod grammars;
pub mod lexer;
pub mod parser;

pub use lexer::{Lexer, LexingError, Location, PatternError, Token, TokenKind};
pub use parser::{
    ignore, lazy, singleton, token, Found, Parser, ParsingFailure, ParsingResult, ParsingSuccess,
    Seq, SeqParser,
};
