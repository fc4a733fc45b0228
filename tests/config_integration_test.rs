//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables are serialized with a mutex.

use privguard::config::{load_config, load_config_or_default};
use privguard::domain::PrivGuardError;
use privguard::privacy::{mask_record, DataKind};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("PRIVGUARD_APPLICATION_LOG_LEVEL");
    std::env::remove_var("PRIVGUARD_AUDIT_ENABLED");
    std::env::remove_var("PRIVGUARD_AUDIT_LOG_PATH");
    std::env::remove_var("PRIVGUARD_AUDIT_HASH_USER_IDS");
    std::env::remove_var("PRIVGUARD_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_PRIVGUARD_AUDIT_DIR");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[audit]
enabled = true
log_path = "/tmp/privguard-test/privacy.log"
json_format = false
hash_user_ids = true

[logging]
local_enabled = false
local_rotation = "hourly"

[records]
email_fields = ["login"]
phone_fields = ["cell"]
name_fields = ["holder"]
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.audit.enabled, Some(true));
    assert_eq!(
        config.audit.log_path,
        Some(PathBuf::from("/tmp/privguard-test/privacy.log"))
    );
    assert!(!config.audit.json_format);
    assert!(config.audit.hash_user_ids);
    assert_eq!(config.logging.local_rotation, "hourly");
    assert_eq!(config.records.kind_for("login"), Some(DataKind::Email));
    assert_eq!(config.records.kind_for("email"), None);

    let masked = mask_record(
        &json!({"login": "mukul@gmail.com", "cell": "9876543210", "holder": "Mukul Kumar"}),
        &config.records,
    );
    assert_eq!(
        masked,
        json!({"login": "m***@gmail.com", "cell": "******3210", "holder": "M*** K***"})
    );
}

#[test]
fn test_load_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.records.kind_for("email"), Some(DataKind::Email));
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_PRIVGUARD_AUDIT_DIR", "/var/tmp/audit");

    let file = write_config(
        r#"
[audit]
log_path = "${TEST_PRIVGUARD_AUDIT_DIR}/privacy.log"
"#,
    );

    let config = load_config(file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(
        config.audit.log_path,
        Some(PathBuf::from("/var/tmp/audit/privacy.log"))
    );
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[audit]
log_path = "${TEST_PRIVGUARD_AUDIT_DIR}/privacy.log"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_PRIVGUARD_AUDIT_DIR"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PRIVGUARD_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("PRIVGUARD_AUDIT_ENABLED", "false");
    std::env::set_var("PRIVGUARD_AUDIT_HASH_USER_IDS", "TRUE");

    let file = write_config(
        r#"
[application]
log_level = "debug"

[audit]
enabled = true
"#,
    );

    let config = load_config(file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.audit.enabled, Some(false));
    assert!(!config.audit.is_enabled());
    assert!(config.audit.hash_user_ids);
}

#[test]
fn test_invalid_bool_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PRIVGUARD_AUDIT_ENABLED", "yes please");

    let result = load_config_or_default(None);
    cleanup_env_vars();

    assert!(result.is_err());
}

#[test]
fn test_defaults_without_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let config = load_config_or_default(None).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.audit.log_path, None);
}

#[test]
fn test_validation_failures() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let bad_level = write_config("[application]\nlog_level = \"loud\"\n");
    assert!(load_config(bad_level.path()).is_err());

    let bad_rotation = write_config("[logging]\nlocal_rotation = \"weekly\"\n");
    assert!(load_config(bad_rotation.path()).is_err());

    let overlap = write_config("[records]\nemail_fields = [\"contact\"]\nname_fields = [\"Contact\"]\n");
    let err = load_config(overlap.path()).unwrap_err();
    assert!(err.to_string().contains("more than one data kind"));
    assert!(matches!(err, PrivGuardError::Validation(_)));
}

#[test]
fn test_parse_failure_is_configuration_not_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let bad_level = write_config("[application]\nlog_level = \"loud\"\n");
    assert!(matches!(
        load_config(bad_level.path()).unwrap_err(),
        PrivGuardError::Validation(_)
    ));

    let broken = write_config("[application\n");
    assert!(matches!(
        load_config(broken.path()).unwrap_err(),
        PrivGuardError::Configuration(_)
    ));
}

#[test]
fn test_invalid_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[audit\nenabled = true");
    assert!(load_config(file.path()).is_err());
}
