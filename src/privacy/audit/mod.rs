//! Audit logging module
//!
//! Records which kind of personal data was revealed or masked, and for whom.
//! Records never carry the personal data itself.

pub mod logger;

pub use logger::{
    debug_enabled, log_privacy_event, AuditLogger, PrivacyAuditEvent, AUDIT_TARGET,
    DEBUG_ENV_VAR, UNKNOWN_USER,
};
