//! Mask-json command implementation
//!
//! Reads a JSON record from a file or stdin and prints it with the configured
//! personal data fields masked.

use super::{load_or_report, EXIT_CONFIG_ERROR, EXIT_INVALID_INPUT};
use crate::privacy::{mask_record_for_viewer, AuditLogger};
use anyhow::Context;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Arguments for the mask-json command
#[derive(Args, Debug)]
pub struct MaskJsonArgs {
    /// JSON file to read (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// User id owning the record
    #[arg(long)]
    pub subject: Option<String>,

    /// User id of the viewer
    #[arg(long)]
    pub viewer: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl MaskJsonArgs {
    /// Execute the mask-json command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let Some(config) = load_or_report(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };
        let audit = AuditLogger::new(&config.audit)?;

        let raw = self.read_input().await?;
        let record: Value = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(error = %e, "Input is not valid JSON");
                eprintln!("❌ Input is not valid JSON: {e}");
                return Ok(EXIT_INVALID_INPUT);
            }
        };

        let masked = mask_record_for_viewer(
            &record,
            &config.records,
            self.subject.as_deref(),
            self.viewer.as_deref(),
        );

        if let Err(e) = audit.log_event("mask_record", "record", self.viewer.as_deref()) {
            tracing::warn!(error = %e, "Failed to record audit event");
        }

        let output = if self.compact {
            serde_json::to_string(&masked)?
        } else {
            serde_json::to_string_pretty(&masked)?
        };
        println!("{output}");
        Ok(0)
    }

    async fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file: {}", path.display())),
            None => {
                let mut buf = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buf)
                    .await
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}
