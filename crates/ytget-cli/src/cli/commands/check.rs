//! `ytget check` – verify the downloader binary is available.

use anyhow::{Context, Result};
use ytget_core::config::YtgetConfig;
use ytget_core::downloader;

use crate::cli::console;

pub async fn run_check(cfg: &YtgetConfig) -> Result<()> {
    let version = downloader::version(cfg).await.with_context(|| {
        format!(
            "{} is not available (install it from https://github.com/yt-dlp/yt-dlp)",
            cfg.downloader
        )
    })?;
    console::print_success(&format!("{} {} is available.", cfg.downloader, version));
    Ok(())
}
