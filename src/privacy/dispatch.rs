//! Masking by data kind

use crate::privacy::anonymizer::{anonymizer_for, NOT_AVAILABLE};
use crate::privacy::models::DataKind;
use crate::privacy::value::RawValue;

/// Mask a value of a known kind
pub fn mask<'a>(value: impl Into<RawValue<'a>>, kind: DataKind) -> String {
    anonymizer_for(kind).anonymize(value.into())
}

/// Mask a value whose kind is given as a string
///
/// Kinds other than `"email"`, `"phone"` and `"name"` yield `"N/A"`, never the
/// unmasked value.
///
/// ```
/// use privguard::privacy::get_privacy_safe_text;
///
/// assert_eq!(get_privacy_safe_text("Mukul Kumar", "name"), "M*** K***");
/// assert_eq!(get_privacy_safe_text("test", "invalid"), "N/A");
/// ```
pub fn get_privacy_safe_text<'a>(value: impl Into<RawValue<'a>>, kind: &str) -> String {
    match kind.parse::<DataKind>() {
        Ok(kind) => mask(value, kind),
        Err(err) => {
            tracing::debug!(kind = %err.0, "Unsupported data kind, returning placeholder");
            NOT_AVAILABLE.to_string()
        }
    }
}
