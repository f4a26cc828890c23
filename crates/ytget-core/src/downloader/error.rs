//! Downloader error kinds and stderr classification for probes.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error from launching the downloader or interpreting a probe.
///
/// A non-zero exit from a plain fetch is not an error; see `FetchOutcome`.
/// These cover the cases where there is nothing to report without a run:
/// the binary would not start, or a metadata probe produced no usable JSON.
#[derive(Debug, Error)]
pub enum YtdlpError {
    /// The binary could not be run at all (usually: not installed).
    #[error("could not run {downloader}: {source}")]
    Launch {
        downloader: String,
        #[source]
        source: io::Error,
    },
    /// The configured download directory could not be created.
    #[error("could not create download directory {path}: {source}")]
    DownloadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Probe timed out while talking to the site.
    #[error("request timed out; check your internet connection")]
    Timeout,
    /// The target exists but cannot be accessed.
    #[error("video is unavailable or private")]
    Unavailable,
    /// No such video or playlist.
    #[error("video or playlist not found")]
    NotFound,
    /// Probe failed for a reason we do not classify; carries the stderr tail.
    #[error("{downloader} failed: {stderr}")]
    Probe { downloader: String, stderr: String },
    /// Probe exited 0 but its output was not the JSON we expect.
    #[error("unexpected metadata output: {0}")]
    Parse(#[from] serde_json::Error),
    /// Probe exited 0 but listed nothing.
    #[error("no entries found at that URL")]
    Empty,
}

/// Map a failed probe's stderr onto a user-facing error kind.
///
/// The substrings track what yt-dlp actually prints: urllib's "Read timed
/// out", "Video unavailable", "This video is private", "not found".
pub fn classify_probe_failure(downloader: &str, stderr: &str) -> YtdlpError {
    let lower = stderr.to_lowercase();
    if lower.contains("timed out") || lower.contains("timeout") {
        YtdlpError::Timeout
    } else if lower.contains("unavailable") || lower.contains("private") {
        YtdlpError::Unavailable
    } else if lower.contains("not found") {
        YtdlpError::NotFound
    } else {
        YtdlpError::Probe {
            downloader: downloader.to_string(),
            stderr: last_stderr_line(stderr),
        }
    }
}

/// Last non-empty stderr line; yt-dlp puts its final `ERROR:` there.
fn last_stderr_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("(no error output)")
        .to_string()
}
