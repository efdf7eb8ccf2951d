//! Lexer error types

use std::fmt;

use crate::lexer::location::Location;

/// Lexing stopped at a character no pattern, literal or skip rule accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexingError {
    pub location: Location,
    pub message: String,
}

impl LexingError {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_character(location: Location, ch: char) -> Self {
        Self::new(location, format!("Invalid character: '{}'", ch))
    }
}

impl fmt::Display for LexingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

impl std::error::Error for LexingError {}

/// A pattern handed to the lexer failed to compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidPattern { pattern: String, message: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid pattern '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for PatternError {}
