//! Source locations attached to every token
//!
//! A [`Location`] is a `file:line:column` triple. Lines and columns are 1-based;
//! columns count characters, not bytes, so multi-byte UTF-8 input reports the
//! same column a text editor would.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A position in a named source file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub file: Arc<str>,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(file: impl Into<Arc<str>>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// The location of the first character of `file`
    pub fn start(file: impl Into<Arc<str>>) -> Self {
        Self::new(file, 1, 1)
    }

    /// Return the location reached after consuming `text` from here.
    ///
    /// A newline moves to column 1 of the next line; every other character
    /// moves one column to the right.
    pub fn advanced_by(&self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;
        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self {
            file: Arc::clone(&self.file),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
