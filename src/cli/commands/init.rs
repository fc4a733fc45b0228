//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::EXIT_CONFIG_ERROR;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "privguard.toml")]
    pub output: String,

    /// Include comments explaining each option
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: privguard --config {} validate-config", self.output);
                println!("  3. Try it: echo 'mukul@gmail.com' | privguard mask email");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# PrivGuard Configuration File

[application]
log_level = "info"

[audit]
# enabled = true
# log_path = "./audit/privacy.log"
json_format = true
hash_user_ids = false

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"

[records]
email_fields = ["email", "contact_email"]
phone_fields = ["phone", "mobile", "phone_number"]
name_fields = ["name", "full_name", "display_name"]
"#
        .to_string()
    }

    /// Generate configuration with comments
    fn generate_config_with_examples() -> String {
        r#"# PrivGuard Configuration File
#
# Every section is optional. Values may reference environment variables
# with ${VAR_NAME}; PRIVGUARD_<SECTION>_<KEY> variables override any value.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Privacy Audit
# ============================================================================
[audit]
# Emit an audit record for every masking operation.
# When unset, records are emitted in debug builds or when PRIVGUARD_DEBUG=true.
# enabled = true

# Also append records to this file
# log_path = "./audit/privacy.log"

# JSON lines (true) or plain text (false) in the audit file
json_format = true

# Write SHA-256 hashes instead of user ids to the audit file
hash_user_ids = false

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Rotation: daily, hourly, never
local_rotation = "daily"

# ============================================================================
# JSON Record Masking (mask-json)
# ============================================================================
[records]
# Keys are matched case-insensitively at any depth
email_fields = ["email", "contact_email"]
phone_fields = ["phone", "mobile", "phone_number"]
name_fields = ["name", "full_name", "display_name"]
"#
        .to_string()
    }
}
