//! Boundary input type for the maskers
//!
//! Callers hand the maskers whatever they hold: a string, nothing at all, or a
//! value of some other shape (for instance a number pulled out of a JSON
//! payload). [`RawValue`] narrows that down once at the entry of every masker.

use serde_json::Value;

/// Untrusted input to a masking function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    /// A string value (possibly empty)
    Text(&'a str),
    /// No value (null / not supplied)
    Missing,
    /// A value that is not a string
    Other,
}

impl<'a> RawValue<'a> {
    /// Returns the text when the input is a non-empty string
    pub fn non_empty_text(&self) -> Option<&'a str> {
        match *self {
            RawValue::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        RawValue::Text(value)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(value: &'a String) -> Self {
        RawValue::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for RawValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(RawValue::Missing, RawValue::Text)
    }
}

impl<'a> From<&'a Value> for RawValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => RawValue::Text(text),
            Value::Null => RawValue::Missing,
            _ => RawValue::Other,
        }
    }
}

impl<'a> From<Option<&'a Value>> for RawValue<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(RawValue::Missing, RawValue::from)
    }
}
