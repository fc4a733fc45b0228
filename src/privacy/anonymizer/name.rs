//! Name masking

use super::{mask_after_first, Anonymizer, ANONYMOUS_USER};
use crate::privacy::models::DataKind;
use crate::privacy::value::RawValue;

/// Keeps the first character of every whitespace-separated name part
pub struct NameAnonymizer;

impl Anonymizer for NameAnonymizer {
    fn kind(&self) -> DataKind {
        DataKind::Name
    }

    fn anonymize(&self, input: RawValue<'_>) -> String {
        let Some(name) = input.non_empty_text() else {
            return ANONYMOUS_USER.to_string();
        };

        let parts: Vec<String> = name.split_whitespace().filter_map(mask_after_first).collect();
        if parts.is_empty() {
            return ANONYMOUS_USER.to_string();
        }

        parts.join(" ")
    }
}

/// Mask a person's name for display
///
/// ```
/// use privguard::privacy::anonymize_name;
///
/// assert_eq!(anonymize_name("Mukul  Kumar   Raj"), "M*** K*** R***");
/// assert_eq!(anonymize_name("   "), "Anonymous User");
/// ```
pub fn anonymize_name<'a>(input: impl Into<RawValue<'a>>) -> String {
    NameAnonymizer.anonymize(input.into())
}
