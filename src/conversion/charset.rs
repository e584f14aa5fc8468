//! Valid-character set consulted during numeric prefix recovery
//!
//! Prefix recovery keeps the longest run of characters that belong to this
//! set and discards everything from the first outsider onward. The default
//! table covers digits, sign markers, the decimal point, accounting-style
//! parentheses, and the currency symbol.

use serde::{Deserialize, Serialize};

/// Characters accepted while recovering a numeric prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericCharSet {
    chars: String,
}

/// Default membership table: digits, signs, parentheses, decimal point,
/// currency symbol
const DEFAULT_NUMERIC_CHARS: &str = "0123456789+-().$";

impl NumericCharSet {
    /// Create a character set from an explicit membership table
    pub fn new(chars: impl Into<String>) -> Self {
        Self {
            chars: chars.into(),
        }
    }

    /// Check whether a character belongs to the set
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(ch)
    }

    /// Check that all ten ASCII digits are members
    ///
    /// A set without the digits would reject every numeric prefix, so
    /// configuration validation insists on this.
    pub fn covers_digits(&self) -> bool {
        ('0'..='9').all(|d| self.chars.contains(d))
    }

    /// The membership table as a string slice
    pub fn as_str(&self) -> &str {
        &self.chars
    }
}

impl Default for NumericCharSet {
    fn default() -> Self {
        Self::new(DEFAULT_NUMERIC_CHARS)
    }
}
