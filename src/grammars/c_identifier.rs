//! Turning arbitrary names into valid C identifiers
//!
//! Alphabetic characters and `_` pass through; anything else becomes `_`
//! followed by its decimal code point, so `lisp-name` becomes `lisp_45name`.

use std::fmt;

pub fn to_c_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphabetic() || ch == '_' {
            sanitized.push(ch);
        } else {
            sanitized.push('_');
            sanitized.push_str(&u32::from(ch).to_string());
        }
    }
    sanitized
}

/// A name already rewritten into C identifier form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CIdentifier {
    name: String,
}

impl CIdentifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: to_c_name(name),
        }
    }

    pub fn as_code(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
