//! Grammars built on the toolkit
//!
//! These are users of the lexer and combinator API rather than part of it:
//! an arithmetic expression language and a C identifier sanitizer.

pub mod arithmetic;
pub mod c_identifier;
