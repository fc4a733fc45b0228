//! CLI command implementations

pub mod check;
pub mod init;
pub mod mask;
pub mod mask_json;
pub mod validate;

use crate::config::{load_config_or_default, PrivGuardConfig};
use crate::log_error_with_context;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for unreadable or malformed input
pub const EXIT_INVALID_INPUT: i32 = 1;

/// Load configuration for a command, printing the error on failure
fn load_or_report(config_path: Option<&str>) -> Option<PrivGuardConfig> {
    match load_config_or_default(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            log_error_with_context!(&e, "Failed to load configuration");
            eprintln!("❌ Failed to load configuration");
            eprintln!("   Error: {e}");
            None
        }
    }
}
