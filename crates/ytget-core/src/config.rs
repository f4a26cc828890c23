use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/ytget/config.toml`.
///
/// The defaults reproduce the stock invocation exactly:
/// `yt-dlp -f bestvideo+bestaudio --merge-output-format mp4 -o "%(title)s.mp4" <url>`.
/// Editing the file is opt-in; a missing file is replaced with these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtgetConfig {
    /// Downloader binary: a bare name resolved via PATH, or an absolute path.
    pub downloader: String,
    /// Format selection passed to `-f`.
    pub format: String,
    /// Container passed to `--merge-output-format`.
    pub merge_format: String,
    /// Output filename template, in the downloader's own template syntax.
    pub output_template: String,
    /// Directory downloads land in (created on demand). None = current dir.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Maximum number of playlist entries listed or fetched in one run.
    pub playlist_limit: usize,
    /// `--socket-timeout` in seconds for metadata probes. 0 disables the flag.
    /// Plain fetches never get a timeout; large downloads may legitimately stall.
    pub probe_timeout_secs: u64,
}

impl Default for YtgetConfig {
    fn default() -> Self {
        Self {
            downloader: "yt-dlp".to_string(),
            format: "bestvideo+bestaudio".to_string(),
            merge_format: "mp4".to_string(),
            output_template: "%(title)s.mp4".to_string(),
            download_dir: None,
            playlist_limit: 20,
            probe_timeout_secs: 30,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YtgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = YtgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: YtgetConfig = toml::from_str(&data)?;
    Ok(cfg)
}
