//! Check command implementation
//!
//! Prints `mask` when the viewer would see the subject's data masked and
//! `show` when the viewer owns it.

use crate::privacy::should_anonymize;
use clap::Args;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// User id owning the data
    #[arg(long)]
    pub subject: Option<String>,

    /// User id of the viewer
    #[arg(long)]
    pub viewer: Option<String>,
}

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        println!("{}", self.decision());
        Ok(0)
    }

    fn decision(&self) -> &'static str {
        if should_anonymize(self.subject.as_deref(), self.viewer.as_deref()) {
            "mask"
        } else {
            "show"
        }
    }
}
