//! Database value extraction and raw byte projection

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scalar as delivered by a database driver
///
/// `Null` models the driver's explicit NULL marker; Rust-level absence of a
/// value is the `Option` wrapper around a borrowed `DbValue`. Both collapse
/// to an empty string on extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DbValue {
    /// Explicit database NULL marker
    Null,
    /// Character data
    Text(String),
    /// Whole-number data
    Integer(i64),
    /// Floating-point data
    Float(f64),
    /// Boolean data
    Bool(bool),
}

impl DbValue {
    /// Create a text value
    pub fn from_text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Check whether this is the database NULL marker
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for DbValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbValue::Null => Ok(()),
            DbValue::Text(s) => write!(f, "{}", s),
            DbValue::Integer(i) => write!(f, "{}", i),
            DbValue::Float(v) => write!(f, "{}", v),
            DbValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for DbValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DbValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DbValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for DbValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for DbValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Value> for DbValue {
    /// Map a decoded JSON scalar onto the database value model
    ///
    /// Arrays and objects are not scalars; they degrade to their JSON text,
    /// matching what a driver's stringification would hand back.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => Self::Text(s),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Convert the given database value to a string
///
/// Returns the value stringified and trimmed, or an empty string when the
/// value is absent or the database NULL marker. Absence is never an error.
pub fn db_value_to_string(value: Option<&DbValue>) -> String {
    match value {
        None => String::new(),
        Some(DbValue::Null) => String::new(),
        Some(v) => v.to_string().trim().to_string(),
    }
}

/// Convert the given byte buffer to a string
///
/// Each byte maps to the character at the same ordinal value. This is a raw
/// 1:1 byte-to-codepoint projection, not a charset-aware decode; bytes
/// 128-255 land on U+0080-U+00FF so legacy binary-safe round-tripping keeps
/// working. A missing buffer yields an empty string.
pub fn byte_array_to_string(bytes: Option<&[u8]>) -> String {
    match bytes {
        None => String::new(),
        Some(buffer) => buffer.iter().map(|&b| char::from(b)).collect(),
    }
}
