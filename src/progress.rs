//! Terminal spinner shown while the client tools run.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

pub fn spinner(message: String) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to create spinner template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(message);
    Ok(pb)
}
