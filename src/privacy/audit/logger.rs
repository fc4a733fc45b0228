//! Audit logger for privacy events

use crate::config::AuditConfig;
use crate::domain::{PrivGuardError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Tracing target for audit records
pub const AUDIT_TARGET: &str = "privacy_audit";

/// Environment variable overriding the build's debug indicator
pub const DEBUG_ENV_VAR: &str = "PRIVGUARD_DEBUG";

/// User id recorded when the caller does not supply one
pub const UNKNOWN_USER: &str = "unknown";

/// One privacy audit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyAuditEvent {
    pub action: String,
    pub data_type: String,
    pub user_id: String,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
}

impl PrivacyAuditEvent {
    /// Create an event stamped with the current time
    pub fn new(action: &str, data_type: &str, user_id: Option<&str>) -> Self {
        Self::at(action, data_type, user_id, Utc::now())
    }

    /// Create an event stamped with the given time
    pub fn at(action: &str, data_type: &str, user_id: Option<&str>, time: DateTime<Utc>) -> Self {
        Self {
            action: action.to_string(),
            data_type: data_type.to_string(),
            user_id: user_id.unwrap_or(UNKNOWN_USER).to_string(),
            timestamp: time.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Whether the process runs with the debug indicator on
///
/// Debug builds are on by default, release builds off. `PRIVGUARD_DEBUG`
/// (`true`/`false`) overrides either; unparsable values are ignored.
pub fn debug_enabled() -> bool {
    std::env::var(DEBUG_ENV_VAR)
        .ok()
        .and_then(|val| val.trim().to_lowercase().parse::<bool>().ok())
        .unwrap_or(cfg!(debug_assertions))
}

/// Emit one privacy audit record to the log when the debug indicator is on
///
/// Fire-and-forget: nothing is buffered, retried or persisted.
pub fn log_privacy_event(action: &str, data_type: &str, user_id: Option<&str>) {
    if !debug_enabled() {
        return;
    }
    emit(&PrivacyAuditEvent::new(action, data_type, user_id));
}

fn emit(event: &PrivacyAuditEvent) {
    tracing::info!(
        target: AUDIT_TARGET,
        action = %event.action,
        dataType = %event.data_type,
        userId = %event.user_id,
        timestamp = %event.timestamp,
        "Privacy event"
    );
}

/// Configurable audit logger
///
/// Always emits through `tracing` when enabled; additionally appends each
/// record to a file when a log path is configured.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    enabled: bool,
    log_path: Option<PathBuf>,
    json_format: bool,
    hash_user_ids: bool,
}

impl AuditLogger {
    /// Create an audit logger from configuration
    pub fn new(config: &AuditConfig) -> Result<Self> {
        let enabled = config.is_enabled();

        if enabled {
            if let Some(parent) = config.log_path.as_ref().and_then(|p| p.parent()) {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        PrivGuardError::Audit(format!(
                            "Failed to create audit log directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
            }
        }

        Ok(Self {
            enabled,
            log_path: config.log_path.clone(),
            json_format: config.json_format,
            hash_user_ids: config.hash_user_ids,
        })
    }

    /// A logger that records nothing
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            log_path: None,
            json_format: true,
            hash_user_ids: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a privacy event
    ///
    /// Returns the emitted event, or `None` when the logger is disabled.
    pub fn log_event(
        &self,
        action: &str,
        data_type: &str,
        user_id: Option<&str>,
    ) -> Result<Option<PrivacyAuditEvent>> {
        if !self.enabled {
            return Ok(None);
        }

        let event = PrivacyAuditEvent::new(action, data_type, user_id);
        emit(&event);

        if let Some(path) = &self.log_path {
            self.write_entry(path, &event)?;
        }

        Ok(Some(event))
    }

    /// SHA-256 of a user id, hex encoded
    fn hash_user_id(&self, user_id: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(user_id.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn write_entry(&self, path: &Path, event: &PrivacyAuditEvent) -> Result<()> {
        let mut entry = event.clone();
        if self.hash_user_ids {
            entry.user_id = self.hash_user_id(&entry.user_id);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                PrivGuardError::Audit(format!(
                    "Failed to open audit log {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let line = if self.json_format {
            serde_json::to_string(&entry)?
        } else {
            format!(
                "[{}] action={} dataType={} userId={}",
                entry.timestamp, entry.action, entry.data_type, entry.user_id
            )
        };

        writeln!(file, "{line}")
            .map_err(|e| PrivGuardError::Audit(format!("Failed to write audit entry: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn file_config(path: PathBuf, json_format: bool, hash_user_ids: bool) -> AuditConfig {
        AuditConfig {
            enabled: Some(true),
            log_path: Some(path),
            json_format,
            hash_user_ids,
        }
    }

    #[test]
    fn test_event_defaults_user_to_unknown() {
        let event = PrivacyAuditEvent::new("view", "email", None);
        assert_eq!(event.user_id, UNKNOWN_USER);
        assert!(DateTime::parse_from_rfc3339(&event.timestamp).is_ok());
    }

    #[test]
    fn test_event_timestamp_format() {
        let time = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 5).unwrap();
        let event = PrivacyAuditEvent::at("mask", "phone", Some("user123"), time);
        assert_eq!(event.timestamp, "2026-03-01T12:30:05.000Z");
    }

    #[test]
    fn test_event_serializes_with_camel_case_keys() {
        let event = PrivacyAuditEvent::new("mask", "name", Some("u1"));
        let value = serde_json::to_value(&event).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["action", "dataType", "timestamp", "userId"]);
    }

    #[test]
    fn test_disabled_logger_records_nothing() {
        let logger = AuditLogger::disabled();
        assert!(!logger.is_enabled());
        assert_eq!(logger.log_event("mask", "email", Some("u1")).unwrap(), None);
    }

    #[test]
    fn test_json_file_sink() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit").join("privacy.log");
        let logger = AuditLogger::new(&file_config(log_path.clone(), true, false)).unwrap();

        let event = logger.log_event("mask", "email", Some("user123")).unwrap().unwrap();
        logger.log_event("reveal", "phone", None).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: PrivacyAuditEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, event);
        let second: PrivacyAuditEvent = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.user_id, UNKNOWN_USER);
    }

    #[test]
    fn test_hashed_user_ids_in_file_only() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("privacy.log");
        let logger = AuditLogger::new(&file_config(log_path.clone(), true, true)).unwrap();

        let event = logger.log_event("mask", "name", Some("user123")).unwrap().unwrap();
        assert_eq!(event.user_id, "user123");

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(!content.contains("user123"));
        assert!(content.contains(&logger.hash_user_id("user123")));
    }

    #[test]
    fn test_plain_text_file_sink() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("privacy.log");
        let logger = AuditLogger::new(&file_config(log_path.clone(), false, false)).unwrap();

        logger.log_event("mask", "phone", Some("u9")).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("action=mask dataType=phone userId=u9"));
    }

    #[test]
    fn test_hash_is_stable() {
        let logger = AuditLogger::disabled();
        assert_eq!(logger.hash_user_id("a"), logger.hash_user_id("a"));
        assert_ne!(logger.hash_user_id("a"), logger.hash_user_id("b"));
    }
}
