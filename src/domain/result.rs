//! Result type alias for PrivGuard

use super::errors::PrivGuardError;

/// Result type alias for PrivGuard operations
///
/// # Examples
///
/// ```
/// use privguard::domain::result::Result;
/// use privguard::domain::errors::PrivGuardError;
///
/// fn failing_function() -> Result<()> {
///     Err(PrivGuardError::Validation("Invalid input".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, PrivGuardError>;
