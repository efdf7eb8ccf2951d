//! Lexer module
//!
//! A generic, table-driven lexer. Grammar authors supply a closed token-type
//! enumeration, register regex and literal rules for it, and get back a
//! `Vec<Token<K>>` or the first [`LexingError`].

pub mod error;
pub mod lexer_impl;
pub mod location;
pub mod token;

pub use error::{LexingError, PatternError};
pub use lexer_impl::Lexer;
pub use location::Location;
pub use token::{Token, TokenKind};
