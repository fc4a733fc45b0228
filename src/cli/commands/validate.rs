//! Validate config command implementation

use super::EXIT_CONFIG_ERROR;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let config_path = config_path.unwrap_or("privguard.toml");
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Audit Enabled: {}", config.audit.is_enabled());
        match &config.audit.log_path {
            Some(path) => println!("  Audit File: {}", path.display()),
            None => println!("  Audit File: (log only)"),
        }
        println!("  Hash User IDs: {}", config.audit.hash_user_ids);
        println!("  File Logging: {}", config.logging.local_enabled);
        println!("  Email Fields: {:?}", config.records.email_fields);
        println!("  Phone Fields: {:?}", config.records.phone_fields);
        println!("  Name Fields: {:?}", config.records.name_fields);
        println!();
        Ok(0)
    }
}
