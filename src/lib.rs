// PrivGuard - masking of personal data for display
// Copyright (c) 2025 PrivGuard Contributors
// Licensed under the MIT License

//! # PrivGuard - masking of personal data for display
//!
//! PrivGuard turns email addresses, phone numbers and names into partially
//! masked strings that remain recognizable to their owner, decides which
//! viewers see data unmasked, and records privacy audit events.
//!
//! ## Architecture
//!
//! - [`privacy`] - Maskers, viewer policy, record masking and audit logging
//! - [`config`] - Configuration management
//! - [`domain`] - Error types
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use privguard::privacy::{anonymize_email, anonymize_name, anonymize_phone};
//!
//! assert_eq!(anonymize_email("mukul@gmail.com"), "m***@gmail.com");
//! assert_eq!(anonymize_phone("+91 9876543210"), "+91 ******3210");
//! assert_eq!(anonymize_name("Mukul Kumar"), "M*** K***");
//! ```
//!
//! ## Failing Closed
//!
//! Masking never returns an error. Input that cannot be masked with
//! confidence becomes a placeholder (`"N/A"`, `"Invalid email"`,
//! `"Anonymous User"`) instead of being echoed:
//!
//! ```rust
//! use privguard::privacy::{anonymize_email, get_privacy_safe_text, RawValue};
//!
//! assert_eq!(anonymize_email(RawValue::Missing), "N/A");
//! assert_eq!(anonymize_email("user@@example.com"), "Invalid email");
//! assert_eq!(get_privacy_safe_text("secret", "ssn"), "N/A");
//! ```
//!
//! ## Audit Events
//!
//! ```rust,no_run
//! use privguard::privacy::log_privacy_event;
//!
//! // No-op unless the debug indicator is on
//! log_privacy_event("view_profile", "email", Some("user123"));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod privacy;
