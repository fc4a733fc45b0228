//! Email masking

use super::{mask_after_first, Anonymizer, INVALID_EMAIL, NOT_AVAILABLE};
use crate::privacy::models::DataKind;
use crate::privacy::value::RawValue;

/// Keeps the first character of the local part and the whole domain
pub struct EmailAnonymizer;

impl Anonymizer for EmailAnonymizer {
    fn kind(&self) -> DataKind {
        DataKind::Email
    }

    fn anonymize(&self, input: RawValue<'_>) -> String {
        let Some(email) = input.non_empty_text() else {
            return NOT_AVAILABLE.to_string();
        };

        let mut parts = email.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return INVALID_EMAIL.to_string();
        };

        if domain.is_empty() {
            return INVALID_EMAIL.to_string();
        }

        match mask_after_first(local) {
            Some(masked_local) => format!("{masked_local}@{domain}"),
            None => INVALID_EMAIL.to_string(),
        }
    }
}

/// Mask an email address for display
///
/// Keeps the first character of the local part, replaces the rest with
/// `***` and keeps the domain verbatim. Input with other than exactly one `@`
/// gives `"Invalid email"`.
///
/// Deliberate departure from the plain `local[0] + "***@" + domain` rule: an
/// empty local part or an empty domain (`"@example.com"`, `"user@"`) also
/// gives `"Invalid email"` instead of a half-formed mask such as `"u***@"`.
///
/// ```
/// use privguard::privacy::{anonymize_email, RawValue};
///
/// assert_eq!(anonymize_email("mukul@gmail.com"), "m***@gmail.com");
/// assert_eq!(anonymize_email("user@@example.com"), "Invalid email");
/// assert_eq!(anonymize_email(RawValue::Missing), "N/A");
/// ```
pub fn anonymize_email<'a>(input: impl Into<RawValue<'a>>) -> String {
    EmailAnonymizer.anonymize(input.into())
}
