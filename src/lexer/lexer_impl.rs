//! Table-driven lexer implementation
//!
//! The lexer holds four ordered tables: token patterns, token literals, skip
//! patterns and skip literals. Lexing alternates between two phases:
//!
//! - Skip phase: every skip pattern, then every skip literal, is tried in
//!   registration order. Each one that matches consumes its text. Passes repeat
//!   until a whole pass matches nothing, so whitespace and comment rules can
//!   interleave freely.
//! - Match phase: token patterns are tried in registration order, then token
//!   literals. The first match wins. This is first-match, not longest-match:
//!   overlapping rules must be registered most specific first.
//!
//! Matches of length zero never count, so patterns like `\s*` cannot stall
//! the cursor.

use regex::Regex;

use crate::lexer::error::{LexingError, PatternError};
use crate::lexer::location::Location;
use crate::lexer::token::{Token, TokenKind};

/// A lexer configured with pattern and literal rules for the token type `K`
///
/// Rules are registered once and the lexer is then used read-only. Registering
/// the same token type twice keeps both rules; the earlier one is tried first.
#[derive(Debug, Clone)]
pub struct Lexer<K> {
    patterns: Vec<(K, Regex)>,
    literals: Vec<(K, String)>,
    skip_patterns: Vec<Regex>,
    skip_literals: Vec<String>,
}

impl<K: TokenKind> Lexer<K> {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            literals: Vec::new(),
            skip_patterns: Vec::new(),
            skip_literals: Vec::new(),
        }
    }

    /// Register a regex producing tokens of type `kind`
    pub fn add_regex(&mut self, kind: K, pattern: &str) -> Result<&mut Self, PatternError> {
        let regex = compile_anchored(pattern)?;
        self.patterns.push((kind, regex));
        Ok(self)
    }

    /// Register an exact string producing tokens of type `kind`
    pub fn add_str(&mut self, kind: K, literal: impl Into<String>) -> &mut Self {
        self.literals.push((kind, literal.into()));
        self
    }

    /// Register a regex whose matches are consumed without producing tokens
    pub fn skip_regex(&mut self, pattern: &str) -> Result<&mut Self, PatternError> {
        let regex = compile_anchored(pattern)?;
        self.skip_patterns.push(regex);
        Ok(self)
    }

    /// Register an exact string that is consumed without producing tokens
    pub fn skip_string(&mut self, literal: impl Into<String>) -> &mut Self {
        self.skip_literals.push(literal.into());
        self
    }

    /// Convert `source` into tokens, tagging each with a location in `file_name`
    ///
    /// Fails on the first character that no rule accepts.
    pub fn lex(&self, file_name: &str, source: &str) -> Result<Vec<Token<K>>, LexingError> {
        let mut cursor = Cursor::new(file_name, source);
        let mut tokens = Vec::new();

        loop {
            self.run_skips(&mut cursor);

            let rest = cursor.rest();
            let Some(first) = rest.chars().next() else {
                break;
            };

            let Some((kind, len)) = self.match_token(rest) else {
                let err = LexingError::invalid_character(cursor.location.clone(), first);
                log::debug!("lexing failed: {}", err);
                return Err(err);
            };

            let location = cursor.location.clone();
            let value = cursor.consume(len);
            let token = Token::new(kind, value, location);
            log::trace!("{} {}", token.location, token);
            tokens.push(token);
        }

        Ok(tokens)
    }

    fn run_skips(&self, cursor: &mut Cursor<'_>) {
        loop {
            let mut matched = false;

            for skip in &self.skip_patterns {
                if let Some(len) = match_pattern(skip, cursor.rest()) {
                    cursor.consume(len);
                    matched = true;
                }
            }

            for skip in &self.skip_literals {
                if let Some(len) = match_literal(skip, cursor.rest()) {
                    cursor.consume(len);
                    matched = true;
                }
            }

            if !matched {
                break;
            }
        }
    }

    fn match_token(&self, rest: &str) -> Option<(K, usize)> {
        self.patterns
            .iter()
            .find_map(|(kind, regex)| match_pattern(regex, rest).map(|len| (*kind, len)))
            .or_else(|| {
                self.literals
                    .iter()
                    .find_map(|(kind, literal)| match_literal(literal, rest).map(|len| (*kind, len)))
            })
    }
}

impl<K: TokenKind> Default for Lexer<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lexing position: remaining input plus the location of its first character
struct Cursor<'s> {
    source: &'s str,
    offset: usize,
    location: Location,
}

impl<'s> Cursor<'s> {
    fn new(file_name: &str, source: &'s str) -> Self {
        Self {
            source,
            offset: 0,
            location: Location::start(file_name),
        }
    }

    fn rest(&self) -> &'s str {
        &self.source[self.offset..]
    }

    fn consume(&mut self, len: usize) -> &'s str {
        let text = &self.source[self.offset..self.offset + len];
        self.location = self.location.advanced_by(text);
        self.offset += len;
        text
    }
}

fn compile_anchored(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|e| PatternError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Length of a non-empty prefix match of `regex` against `text`
fn match_pattern(regex: &Regex, text: &str) -> Option<usize> {
    regex.find(text).map(|m| m.end()).filter(|&len| len > 0)
}

fn match_literal(literal: &str, text: &str) -> Option<usize> {
    if !literal.is_empty() && text.starts_with(literal) {
        Some(literal.len())
    } else {
        None
    }
}
