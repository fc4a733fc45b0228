//! Privacy masking for display of personal data
//!
//! This module turns raw personal data (email addresses, phone numbers, names)
//! into partially masked strings that stay recognizable to their owner while
//! hiding them from everyone else.
//!
//! # Architecture
//!
//! - **Anonymizers**: one masker per [`DataKind`], each total over any input
//! - **Policy**: [`should_anonymize`] decides whether a viewer sees raw data
//! - **Dispatch**: [`get_privacy_safe_text`] masks by kind name, failing closed
//! - **Records**: [`mask_record`] masks configured fields of a JSON payload
//! - **Audit**: [`log_privacy_event`] and [`AuditLogger`] record access events
//!
//! # Usage
//!
//! ```rust
//! use privguard::privacy::{get_privacy_safe_text, should_anonymize};
//!
//! let viewer = Some("user456");
//! let owner = Some("user123");
//!
//! let email = "mukul@gmail.com";
//! let shown = if should_anonymize(owner, viewer) {
//!     get_privacy_safe_text(email, "email")
//! } else {
//!     email.to_string()
//! };
//! assert_eq!(shown, "m***@gmail.com");
//! ```

pub mod anonymizer;
pub mod audit;
pub mod dispatch;
pub mod models;
pub mod policy;
pub mod record;
pub mod value;

// Re-export main types
pub use anonymizer::{
    anonymize_email, anonymize_name, anonymize_phone, Anonymizer, ANONYMOUS_USER, INVALID_EMAIL,
    NOT_AVAILABLE,
};
pub use audit::{log_privacy_event, AuditLogger, PrivacyAuditEvent};
pub use dispatch::{get_privacy_safe_text, mask};
pub use models::DataKind;
pub use policy::should_anonymize;
pub use record::{mask_record, mask_record_for_viewer, FieldRules};
pub use value::RawValue;
