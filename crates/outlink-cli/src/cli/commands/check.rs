//! `outlink check <url>` – validate a destination URL.

use anyhow::Result;
use outlink_core::validate;

pub fn run_check(url: &str) -> Result<()> {
    match validate::validate(url) {
        Ok(safe) => {
            println!("{safe}");
            Ok(())
        }
        Err(reason) => {
            tracing::info!(%reason, "destination rejected");
            anyhow::bail!("rejected: {reason}")
        }
    }
}
