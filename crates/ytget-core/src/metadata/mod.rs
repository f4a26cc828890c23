//! Metadata probes: ask the downloader about a URL without fetching it.
//!
//! Single videos use `--dump-json`; playlists use `--flat-playlist`, where
//! the downloader prints one JSON object per entry. Probes capture stdout
//! and stderr, unlike fetches, so failures can be classified.

mod parse;

pub use parse::{format_duration, VideoMeta};

use std::process::Stdio;

use tokio::process::Command;

use crate::config::YtgetConfig;
use crate::downloader::{
    classify_probe_failure, playlist_probe_args, video_probe_args, YtdlpError,
};

/// A playlist as listed by a flat probe.
#[derive(Debug, Clone)]
pub struct PlaylistMeta {
    /// Playlist title, if any entry reported one.
    pub title: Option<String>,
    /// Entries in listing order, capped at `playlist_limit`.
    pub entries: Vec<VideoMeta>,
    /// Entry count before the cap.
    pub total: usize,
}

impl PlaylistMeta {
    pub fn truncated(&self) -> bool {
        self.total > self.entries.len()
    }
}

/// Probe a single video. `--no-playlist` keeps list URLs from fanning out.
pub async fn probe_video(cfg: &YtgetConfig, url: &str) -> Result<VideoMeta, YtdlpError> {
    let stdout = run_probe(cfg, video_probe_args(cfg, url)).await?;
    let meta: VideoMeta = serde_json::from_str(stdout.trim())?;
    Ok(meta)
}

/// Probe a playlist. A plain video URL degenerates to a one-entry listing.
pub async fn probe_playlist(cfg: &YtgetConfig, url: &str) -> Result<PlaylistMeta, YtdlpError> {
    let stdout = run_probe(cfg, playlist_probe_args(cfg, url)).await?;
    let mut entries = parse_flat_lines(&stdout)?;
    let total = entries.len();
    let title = entries
        .iter()
        .find_map(|e| e.playlist_name().map(str::to_string));
    entries.truncate(cfg.playlist_limit);
    Ok(PlaylistMeta {
        title,
        entries,
        total,
    })
}

/// Split flat-probe output into entries. Blank and non-JSON lines are
/// skipped; the downloader sometimes interleaves notices on stdout.
fn parse_flat_lines(stdout: &str) -> Result<Vec<VideoMeta>, YtdlpError> {
    let mut entries = Vec::new();
    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<VideoMeta>(line) {
            Ok(meta) => entries.push(meta),
            Err(err) => tracing::debug!(%err, "skipping non-entry probe line"),
        }
    }
    if entries.is_empty() {
        return Err(YtdlpError::Empty);
    }
    Ok(entries)
}

/// Run one probe with captured output; non-zero exit is classified from stderr.
async fn run_probe(cfg: &YtgetConfig, argv: Vec<String>) -> Result<String, YtdlpError> {
    tracing::debug!(downloader = %cfg.downloader, ?argv, "running metadata probe");
    let output = Command::new(&cfg.downloader)
        .args(&argv)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| YtdlpError::Launch {
            downloader: cfg.downloader.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(code = ?output.status.code(), "probe failed");
        return Err(classify_probe_failure(&cfg.downloader, &stderr));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
