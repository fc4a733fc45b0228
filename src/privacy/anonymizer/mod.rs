//! Masking strategies for each data kind
//!
//! Every masker is total: malformed or missing input maps to a fixed sentinel
//! instead of an error, so a caller always has something safe to display.

pub mod email;
pub mod name;
pub mod phone;

use crate::privacy::models::DataKind;
use crate::privacy::value::RawValue;

pub use email::{anonymize_email, EmailAnonymizer};
pub use name::{anonymize_name, NameAnonymizer};
pub use phone::{anonymize_phone, PhoneAnonymizer};

/// Fixed replacement for the hidden part of an email local part or name part
pub const MASK: &str = "***";

/// Character used when masking digits one for one
pub const MASK_CHAR: char = '*';

/// Sentinel for absent, empty or non-string input
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel for strings that are not a `local@domain` address
pub const INVALID_EMAIL: &str = "Invalid email";

/// Sentinel for absent or blank names
pub const ANONYMOUS_USER: &str = "Anonymous User";

/// Trait for masking implementations
pub trait Anonymizer: Send + Sync {
    /// Kind of data this anonymizer handles
    fn kind(&self) -> DataKind;

    /// Mask a raw value
    fn anonymize(&self, input: RawValue<'_>) -> String;
}

/// Look up the anonymizer for a data kind
pub fn anonymizer_for(kind: DataKind) -> &'static dyn Anonymizer {
    match kind {
        DataKind::Email => &EmailAnonymizer,
        DataKind::Phone => &PhoneAnonymizer,
        DataKind::Name => &NameAnonymizer,
    }
}

/// First character of `part` followed by the fixed mask
fn mask_after_first(part: &str) -> Option<String> {
    part.chars().next().map(|first| format!("{first}{MASK}"))
}
