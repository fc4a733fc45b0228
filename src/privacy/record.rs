//! Masking of JSON records by field name
//!
//! Profiles, order histories and similar payloads carry personal data under
//! predictable keys. [`mask_record`] walks such a payload and masks the values
//! of configured keys, leaving everything else untouched.

use crate::privacy::dispatch::mask;
use crate::privacy::models::DataKind;
use crate::privacy::policy::should_anonymize;
use crate::privacy::value::RawValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names whose values are masked, per data kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRules {
    /// Keys holding email addresses
    #[serde(default = "default_email_fields")]
    pub email_fields: Vec<String>,

    /// Keys holding phone numbers
    #[serde(default = "default_phone_fields")]
    pub phone_fields: Vec<String>,

    /// Keys holding person names
    #[serde(default = "default_name_fields")]
    pub name_fields: Vec<String>,
}

fn default_email_fields() -> Vec<String> {
    vec!["email".to_string(), "contact_email".to_string()]
}

fn default_phone_fields() -> Vec<String> {
    vec![
        "phone".to_string(),
        "mobile".to_string(),
        "phone_number".to_string(),
    ]
}

fn default_name_fields() -> Vec<String> {
    vec![
        "name".to_string(),
        "full_name".to_string(),
        "display_name".to_string(),
    ]
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            email_fields: default_email_fields(),
            phone_fields: default_phone_fields(),
            name_fields: default_name_fields(),
        }
    }
}

impl FieldRules {
    /// Data kind configured for a key, matched case-insensitively
    pub fn kind_for(&self, key: &str) -> Option<DataKind> {
        let matches = |fields: &[String]| fields.iter().any(|f| f.eq_ignore_ascii_case(key));

        if matches(&self.email_fields) {
            Some(DataKind::Email)
        } else if matches(&self.phone_fields) {
            Some(DataKind::Phone)
        } else if matches(&self.name_fields) {
            Some(DataKind::Name)
        } else {
            None
        }
    }

    /// Validate the rules
    ///
    /// Each key may belong to one data kind only.
    pub fn validate(&self) -> Result<(), String> {
        let all = self
            .email_fields
            .iter()
            .chain(&self.phone_fields)
            .chain(&self.name_fields);

        let mut seen: Vec<String> = Vec::new();
        for field in all {
            if field.trim().is_empty() {
                return Err("records field names cannot be empty".to_string());
            }
            let lowered = field.to_ascii_lowercase();
            if seen.contains(&lowered) {
                return Err(format!(
                    "records field '{field}' is configured for more than one data kind"
                ));
            }
            seen.push(lowered);
        }
        Ok(())
    }
}

/// Mask every configured field of a JSON record, recursing into nested
/// objects and arrays
pub fn mask_record(record: &Value, rules: &FieldRules) -> Value {
    match record {
        Value::Object(map) => {
            let masked: Map<String, Value> = map
                .iter()
                .map(|(key, value)| {
                    let value = match rules.kind_for(key) {
                        Some(kind) => mask_field(value, kind),
                        None => mask_record(value, rules),
                    };
                    (key.clone(), value)
                })
                .collect();
            Value::Object(masked)
        }
        Value::Array(items) => Value::Array(items.iter().map(|v| mask_record(v, rules)).collect()),
        other => other.clone(),
    }
}

/// Mask a record unless the viewer owns it
pub fn mask_record_for_viewer(
    record: &Value,
    rules: &FieldRules,
    subject_user_id: Option<&str>,
    viewer_user_id: Option<&str>,
) -> Value {
    if should_anonymize(subject_user_id, viewer_user_id) {
        mask_record(record, rules)
    } else {
        record.clone()
    }
}

/// Arrays under a configured key are masked element by element
fn mask_field(value: &Value, kind: DataKind) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|v| mask_field(v, kind)).collect()),
        other => Value::String(mask(RawValue::from(other), kind)),
    }
}
