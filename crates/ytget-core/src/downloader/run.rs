//! Spawning and waiting on the downloader process.

use std::process::Stdio;

use tokio::process::Command;

use crate::config::YtgetConfig;

use super::args;
use super::error::{classify_probe_failure, YtdlpError};

/// How one downloader fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Exit code 0.
    Completed,
    /// Non-zero exit code.
    Failed(i32),
    /// Killed by a signal before it could report an exit code.
    Interrupted,
}

impl FetchOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, FetchOutcome::Completed)
    }
}

/// Fetch one URL, blocking until the downloader exits.
///
/// The child inherits stdin/stdout/stderr so its own progress display
/// reaches the terminal. A non-zero exit comes back as an outcome, not an
/// `Err`; only failing to start the process at all is an error.
pub async fn fetch(cfg: &YtgetConfig, url: &str) -> Result<FetchOutcome, YtdlpError> {
    if let Some(dir) = &cfg.download_dir {
        std::fs::create_dir_all(dir).map_err(|source| YtdlpError::DownloadDir {
            path: dir.clone(),
            source,
        })?;
    }

    let argv = args::fetch_args(cfg, url);
    tracing::info!(downloader = %cfg.downloader, url, "starting fetch");
    tracing::debug!(?argv, "downloader argv");

    let status = Command::new(&cfg.downloader)
        .args(&argv)
        .status()
        .await
        .map_err(|source| YtdlpError::Launch {
            downloader: cfg.downloader.clone(),
            source,
        })?;

    let outcome = match status.code() {
        Some(0) => FetchOutcome::Completed,
        Some(code) => FetchOutcome::Failed(code),
        None => FetchOutcome::Interrupted,
    };
    tracing::info!(?outcome, url, "fetch finished");
    Ok(outcome)
}

/// Probe the downloader's availability by running `--version`.
///
/// Returns the trimmed version string. `check` uses this to tell a missing
/// binary apart from an install that works.
pub async fn version(cfg: &YtgetConfig) -> Result<String, YtdlpError> {
    let output = Command::new(&cfg.downloader)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| YtdlpError::Launch {
            downloader: cfg.downloader.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(classify_probe_failure(&cfg.downloader, &stderr));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
