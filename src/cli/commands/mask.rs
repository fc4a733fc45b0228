//! Mask command implementation
//!
//! Masks the given values, or every line of stdin when no values are given.

use super::{load_or_report, EXIT_CONFIG_ERROR};
use crate::log_masked;
use crate::privacy::{get_privacy_safe_text, AuditLogger, DataKind};
use clap::Args;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::watch;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Data kind: email, phone or name
    pub kind: String,

    /// Values to mask; stdin is read line by line when omitted
    pub values: Vec<String>,

    /// User id recorded in audit events
    #[arg(long)]
    pub user_id: Option<String>,
}

impl MaskArgs {
    /// Execute the mask command
    pub async fn execute(
        &self,
        config_path: Option<&str>,
        mut shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let Some(config) = load_or_report(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };
        let audit = AuditLogger::new(&config.audit)?;

        if self.kind.parse::<DataKind>().is_err() {
            tracing::warn!(kind = %self.kind, "Unsupported data kind, every value maps to N/A");
        }

        let mut stdout = tokio::io::stdout();
        let mut count = 0usize;

        if !self.values.is_empty() {
            for value in &self.values {
                let line = self.mask_one(value, &audit);
                stdout.write_all(line.as_bytes()).await?;
                count += 1;
            }
        } else {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                tokio::select! {
                    line = lines.next_line() => {
                        let Some(value) = line? else { break };
                        let line = self.mask_one(&value, &audit);
                        stdout.write_all(line.as_bytes()).await?;
                        count += 1;
                    }
                    Ok(()) = shutdown_signal.changed() => {
                        if *shutdown_signal.borrow() {
                            tracing::info!(count, "Shutdown requested, stopping input");
                            break;
                        }
                    }
                }
            }
        }

        stdout.flush().await?;
        log_masked!(self.kind, count);
        Ok(0)
    }

    /// Mask one value, record it, and return the output line
    fn mask_one(&self, value: &str, audit: &AuditLogger) -> String {
        let masked = get_privacy_safe_text(value, &self.kind);
        if let Err(e) = audit.log_event("mask", &self.kind, self.user_id.as_deref()) {
            tracing::warn!(error = %e, "Failed to record audit event");
        }
        format!("{masked}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: &str) -> MaskArgs {
        MaskArgs {
            kind: kind.to_string(),
            values: Vec::new(),
            user_id: None,
        }
    }

    #[test]
    fn test_mask_one() {
        let audit = AuditLogger::disabled();
        assert_eq!(args("phone").mask_one("+91 9876543210", &audit), "+91 ******3210\n");
        assert_eq!(args("name").mask_one("Mukul Kumar", &audit), "M*** K***\n");
    }

    #[test]
    fn test_mask_one_unknown_kind() {
        let audit = AuditLogger::disabled();
        assert_eq!(args("ssn").mask_one("123-45-6789", &audit), "N/A\n");
    }
}
