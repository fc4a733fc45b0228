//! Phone number masking
//!
//! Only the last four digits of the national number stay visible. A leading
//! `+<digits>` country code is carried through when a separator marks where it
//! ends (`+91 98...`, `+91-987-...`). A `+` followed by one unbroken digit run
//! gives no such boundary, so the whole run is treated as the national number.

use super::{Anonymizer, MASK_CHAR, NOT_AVAILABLE};
use crate::privacy::models::DataKind;
use crate::privacy::value::RawValue;

/// Number of trailing digits left visible
pub const VISIBLE_DIGITS: usize = 4;

/// Masks all but the last four digits of the national number
pub struct PhoneAnonymizer;

impl Anonymizer for PhoneAnonymizer {
    fn kind(&self) -> DataKind {
        DataKind::Phone
    }

    fn anonymize(&self, input: RawValue<'_>) -> String {
        let Some(phone) = input.non_empty_text() else {
            return NOT_AVAILABLE.to_string();
        };

        let (country_code, national) = split_country_code(phone.trim());
        let digits: String = national.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return NOT_AVAILABLE.to_string();
        }

        let masked = mask_digits(&digits);
        match country_code {
            Some(code) => format!("+{code} {masked}"),
            None => masked,
        }
    }
}

/// Split off a `+<digits>` prefix that is followed by a separator and more digits
fn split_country_code(phone: &str) -> (Option<&str>, &str) {
    let Some(rest) = phone.strip_prefix('+') else {
        return (None, phone);
    };

    let code_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (code, tail) = rest.split_at(code_len);

    if !code.is_empty() && tail.chars().any(|c| c.is_ascii_digit()) {
        (Some(code), tail)
    } else {
        (None, rest)
    }
}

/// Replace every digit but the last four with `*`; four or fewer are fully hidden
fn mask_digits(digits: &str) -> String {
    let len = digits.len();
    if len <= VISIBLE_DIGITS {
        return MASK_CHAR.to_string().repeat(len);
    }

    let hidden = len - VISIBLE_DIGITS;
    let mut masked = MASK_CHAR.to_string().repeat(hidden);
    masked.push_str(&digits[hidden..]);
    masked
}

/// Mask a phone number for display
///
/// ```
/// use privguard::privacy::anonymize_phone;
///
/// assert_eq!(anonymize_phone("+91-987-654-3210"), "+91 ******3210");
/// assert_eq!(anonymize_phone("1234"), "****");
/// ```
pub fn anonymize_phone<'a>(input: impl Into<RawValue<'a>>) -> String {
    PhoneAnonymizer.anonymize(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_country_code_with_space() {
        assert_eq!(anonymize_phone("+91 9876543210"), "+91 ******3210");
        assert_eq!(anonymize_phone("+1 (555) 123-4567"), "+1 ******4567");
    }

    #[test]
    fn test_country_code_with_hyphens() {
        assert_eq!(anonymize_phone("+91-987-654-3210"), "+91 ******3210");
    }

    #[test]
    fn test_national_only() {
        assert_eq!(anonymize_phone("9876543210"), "******3210");
        assert_eq!(anonymize_phone("(987) 654-3210"), "******3210");
        assert_eq!(anonymize_phone("  987 654 3210  "), "******3210");
    }

    #[test]
    fn test_short_numbers_fully_masked() {
        assert_eq!(anonymize_phone("1234"), "****");
        assert_eq!(anonymize_phone("12"), "**");
        assert_eq!(anonymize_phone("12345"), "*2345");
    }

    #[test]
    fn test_plus_without_boundary() {
        assert_eq!(anonymize_phone("+919876543210"), "********3210");
        assert_eq!(anonymize_phone("+91"), "**");
    }

    #[test]
    fn test_only_leading_plus_is_a_country_code() {
        assert_eq!(anonymize_phone("+44 +20 7946 0958"), "+44 ******0958");
        assert_eq!(anonymize_phone("0044+20"), "**4420");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(anonymize_phone("call me"), NOT_AVAILABLE);
        assert_eq!(anonymize_phone("   "), NOT_AVAILABLE);
        assert_eq!(anonymize_phone("+"), NOT_AVAILABLE);
    }

    #[test]
    fn test_missing_and_non_string() {
        assert_eq!(anonymize_phone(RawValue::Missing), NOT_AVAILABLE);
        assert_eq!(anonymize_phone(""), NOT_AVAILABLE);
        assert_eq!(anonymize_phone(&json!(9876543210u64)), NOT_AVAILABLE);
    }

    #[test]
    fn test_split_country_code() {
        assert_eq!(split_country_code("+91 98"), (Some("91"), " 98"));
        assert_eq!(split_country_code("+9198"), (None, "9198"));
        assert_eq!(split_country_code("98"), (None, "98"));
        assert_eq!(split_country_code("+ 91 98"), (None, " 91 98"));
    }
}
