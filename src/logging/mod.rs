//! Logging and observability
//!
//! Structured logging via `tracing`:
//! - Console output on stderr
//! - Optional JSON log files with rotation
//!
//! Privacy audit records are emitted under the `privacy_audit` target (see
//! [`crate::privacy::audit`]).

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a masking operation
///
/// # Example
///
/// ```no_run
/// use privguard::log_masked;
///
/// log_masked!("email", 3);
/// ```
#[macro_export]
macro_rules! log_masked {
    ($kind:expr, $count:expr) => {
        tracing::debug!(kind = %$kind, count = $count, "Values masked");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use privguard::log_error_with_context;
/// use privguard::domain::PrivGuardError;
///
/// let error = PrivGuardError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
