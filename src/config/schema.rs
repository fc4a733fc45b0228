//! Configuration schema types

use crate::privacy::audit::debug_enabled;
use crate::privacy::FieldRules;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main PrivGuard configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivGuardConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Privacy audit settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Field names masked in JSON records
    #[serde(default)]
    pub records: FieldRules,
}

impl PrivGuardConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        self.records.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Privacy audit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit records; when unset, follows the debug indicator
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Append records to this file in addition to the log
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Write file records as JSON lines (plain text otherwise)
    #[serde(default = "default_true")]
    pub json_format: bool,

    /// Replace user ids in file records with their SHA-256 hash
    #[serde(default)]
    pub hash_user_ids: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            log_path: None,
            json_format: default_true(),
            hash_user_ids: false,
        }
    }
}

impl AuditConfig {
    /// Whether audit records are emitted
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or_else(debug_enabled)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.log_path {
            if path.as_os_str().is_empty() {
                return Err("audit.log_path cannot be empty".to_string());
            }
            if path.is_dir() {
                return Err(format!(
                    "audit.log_path '{}' is a directory",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Accepted values for `logging.local_rotation`
pub const LOG_ROTATIONS: [&str; 3] = ["daily", "hourly", "never"];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !LOG_ROTATIONS.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                LOG_ROTATIONS.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PrivGuardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert!(config.audit.json_format);
        assert!(!config.audit.hash_user_ids);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: PrivGuardConfig = toml::from_str("").unwrap();
        assert_eq!(config.records, FieldRules::default());
        assert_eq!(config.audit.enabled, None);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = PrivGuardConfig::default();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level"));
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = PrivGuardConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_local_logging_requires_path() {
        let mut config = PrivGuardConfig::default();
        config.logging.local_enabled = true;
        config.logging.local_path = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_audit_flag_wins() {
        let audit = AuditConfig {
            enabled: Some(false),
            ..AuditConfig::default()
        };
        assert!(!audit.is_enabled());

        let audit = AuditConfig {
            enabled: Some(true),
            ..AuditConfig::default()
        };
        assert!(audit.is_enabled());
    }

    #[test]
    fn test_audit_path_cannot_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let audit = AuditConfig {
            log_path: Some(dir.path().to_path_buf()),
            ..AuditConfig::default()
        };
        assert!(audit.validate().is_err());
    }
}
