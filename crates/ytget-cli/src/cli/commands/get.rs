//! `ytget get <url>` – fetch one URL without the prompt.

use anyhow::Result;
use ytget_core::config::YtgetConfig;
use ytget_core::downloader;

use crate::cli::console;

pub async fn run_get(cfg: &YtgetConfig, url: &str) -> Result<()> {
    let outcome = downloader::fetch(cfg, url).await?;
    console::report_outcome(&cfg.downloader, outcome);
    Ok(())
}
