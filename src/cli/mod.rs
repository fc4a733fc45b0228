//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for PrivGuard using clap.

pub mod commands;

use crate::config::{load_config_or_default, LoggingConfig};
use clap::{Parser, Subcommand};

/// Log level used when the configuration cannot be loaded
pub const FALLBACK_LOG_LEVEL: &str = "warn";

/// PrivGuard - masking of personal data for display
#[derive(Parser, Debug)]
#[command(name = "privguard")]
#[command(version, about, long_about = None)]
#[command(author = "PrivGuard Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long, env = "PRIVGUARD_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PRIVGUARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level and logging settings for this run
    ///
    /// `--log-level` takes precedence over `[application] log_level`. When the
    /// configuration fails to load, console logging at `warn` is used and the
    /// command itself reports the load error.
    pub fn logging_settings(&self) -> (String, LoggingConfig) {
        match load_config_or_default(self.config.as_deref()) {
            Ok(config) => {
                let level = self
                    .log_level
                    .clone()
                    .unwrap_or(config.application.log_level);
                (level, config.logging)
            }
            Err(_) => {
                let level = self
                    .log_level
                    .clone()
                    .unwrap_or_else(|| FALLBACK_LOG_LEVEL.to_string());
                (level, LoggingConfig::default())
            }
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask values of one data kind (email, phone, name)
    Mask(commands::mask::MaskArgs),

    /// Mask personal data fields of a JSON record
    MaskJson(commands::mask_json::MaskJsonArgs),

    /// Check whether a viewer sees another user's data masked
    Check(commands::check::CheckArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
