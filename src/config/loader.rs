//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PrivGuardConfig;
use crate::domain::errors::PrivGuardError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PrivGuardConfig
/// 4. Applies environment variable overrides (PRIVGUARD_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use privguard::config::loader::load_config;
///
/// let config = load_config("privguard.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PrivGuardConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PrivGuardError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PrivGuardError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PrivGuardConfig = toml::from_str(&contents)
        .map_err(|e| PrivGuardError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration from `path` when given, otherwise starts from defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: Option<&str>) -> Result<PrivGuardConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = PrivGuardConfig::default();
            finish(&mut config)?;
            Ok(config)
        }
    }
}

fn finish(config: &mut PrivGuardConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(PrivGuardError::Validation)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are reported in a
/// single error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PrivGuardError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(PrivGuardError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn env_bool(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(val) => val
            .trim()
            .to_lowercase()
            .parse()
            .map(Some)
            .map_err(|_| PrivGuardError::Configuration(format!("Invalid {name} value: {val}"))),
        Err(_) => Ok(None),
    }
}

/// Applies environment variable overrides using PRIVGUARD_* prefix
///
/// Environment variables follow the pattern: PRIVGUARD_<SECTION>_<KEY>
/// For example: PRIVGUARD_AUDIT_LOG_PATH, PRIVGUARD_LOGGING_LOCAL_ENABLED
fn apply_env_overrides(config: &mut PrivGuardConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PRIVGUARD_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Audit overrides
    if let Some(enabled) = env_bool("PRIVGUARD_AUDIT_ENABLED")? {
        config.audit.enabled = Some(enabled);
    }
    if let Ok(val) = std::env::var("PRIVGUARD_AUDIT_LOG_PATH") {
        config.audit.log_path = Some(PathBuf::from(val));
    }
    if let Some(json_format) = env_bool("PRIVGUARD_AUDIT_JSON_FORMAT")? {
        config.audit.json_format = json_format;
    }
    if let Some(hash) = env_bool("PRIVGUARD_AUDIT_HASH_USER_IDS")? {
        config.audit.hash_user_ids = hash;
    }

    // Logging overrides
    if let Some(enabled) = env_bool("PRIVGUARD_LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = enabled;
    }
    if let Ok(val) = std::env::var("PRIVGUARD_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PRIVGUARD_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
