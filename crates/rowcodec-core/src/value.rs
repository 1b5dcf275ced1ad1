//! Canonical field values.
//!
//! Decoded rows always carry text, but callers hand the encoder whatever
//! they have — numbers, booleans, strings. RowCodec normalizes all of them
//! into a single canonical value type whose `Display` impl is the wire-text
//! conversion, so the encoder never needs per-caller serialization logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field value within a record.
///
/// `Absent` marks a field the row did not supply (the row was shorter than
/// the header, or the caller never set the key). It is distinct from
/// `Str("")`: both serialize to empty wire text, but only `Str("")` means
/// the input actually contained an empty field between two delimiters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Str(String),
    Uint(u64),
    Int(i64),
    Float(f64),
    Bool(bool),
    Absent,
}

impl FieldValue {
    /// Returns `true` if this field was never supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Returns the inner string if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "{s}"),
            FieldValue::Uint(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Absent => Ok(()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Uint(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}
