//! Data kinds handled by the maskers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of personal data a value carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    /// Email addresses
    Email,
    /// Telephone numbers
    Phone,
    /// Person names
    Name,
}

impl DataKind {
    /// All supported kinds
    pub const ALL: [DataKind; 3] = [DataKind::Email, DataKind::Phone, DataKind::Name];

    /// Lowercase label, as used by callers and in audit records
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown data kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown data kind: {0}")]
pub struct UnknownDataKind(pub String);

impl FromStr for DataKind {
    type Err = UnknownDataKind;

    /// Kinds are matched exactly; `"Email"` is not `"email"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "name" => Ok(Self::Name),
            _ => Err(UnknownDataKind(s.to_string())),
        }
    }
}
