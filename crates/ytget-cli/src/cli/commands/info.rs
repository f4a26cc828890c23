//! `ytget info <url>` – show metadata without downloading.

use anyhow::Result;
use ytget_core::config::YtgetConfig;
use ytget_core::metadata;

pub async fn run_info(cfg: &YtgetConfig, url: &str) -> Result<()> {
    let meta = metadata::probe_video(cfg, url).await?;
    println!("Title:    {}", meta.display_title());
    println!("Uploader: {}", meta.display_uploader());
    println!("Duration: {}", meta.display_duration());
    if let Some(page) = meta.webpage_url.as_deref() {
        println!("Page:     {page}");
    }
    Ok(())
}
