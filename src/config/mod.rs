//! Configuration management for PrivGuard.
//!
//! TOML configuration with `${VAR_NAME}` substitution, `PRIVGUARD_*`
//! environment overrides and validation on load. Every section is optional.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/privacy.log"
//! hash_user_ids = true
//!
//! [logging]
//! local_enabled = false
//!
//! [records]
//! email_fields = ["email", "contact_email"]
//! phone_fields = ["phone", "mobile"]
//! name_fields = ["name", "full_name"]
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use privguard::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("privguard.toml")?;
//! println!("Audit enabled: {}", config.audit.is_enabled());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, AuditConfig, LoggingConfig, PrivGuardConfig, LOG_ROTATIONS};
