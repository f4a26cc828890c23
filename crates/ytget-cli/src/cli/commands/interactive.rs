//! Default mode: prompt for a URL on stdin and fetch it.

use anyhow::Result;
use ytget_core::config::YtgetConfig;
use ytget_core::downloader;

use crate::cli::console;

/// Prompt for a URL and hand it to the downloader.
///
/// Blank input (whitespace-only or EOF) warns and exits 1 without ever
/// invoking the downloader. A downloader failure is reported in red but
/// does not change the process exit status; only launch errors bubble up.
pub async fn run_interactive(cfg: &YtgetConfig) -> Result<()> {
    let line = console::prompt_line("Enter the video URL")?;
    let url = match normalized(&line) {
        Some(url) => url.to_string(),
        None => {
            console::print_warning("No URL entered.");
            std::process::exit(1);
        }
    };

    let outcome = downloader::fetch(cfg, &url).await?;
    console::report_outcome(&cfg.downloader, outcome);
    Ok(())
}

/// Trim surrounding whitespace; None when nothing usable remains.
/// Inner characters are untouched, the downloader sees the URL verbatim.
fn normalized(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
