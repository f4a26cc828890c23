//! Serde views of the downloader's `--dump-json` output.

use serde::Deserialize;

/// One video as the downloader reports it, in either the full `--dump-json`
/// form or the sparse `--flat-playlist` form.
///
/// Only fields the CLI shows are kept; everything else in the JSON is
/// ignored. Flat entries omit most of these, so every field is optional and
/// the accessors apply the fallback chains.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoMeta {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Seconds. Flat playlist entries often omit it.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub webpage_url: Option<String>,
    /// Flat entries carry the target here instead of `webpage_url`.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub playlist_title: Option<String>,
    #[serde(default)]
    pub playlist: Option<String>,
}

impl VideoMeta {
    /// Title, or a placeholder when the site gave none.
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or("Untitled Video")
    }

    /// Uploader, falling back to the channel name.
    pub fn display_uploader(&self) -> &str {
        non_empty(self.uploader.as_deref())
            .or_else(|| non_empty(self.channel.as_deref()))
            .unwrap_or("Unknown Channel")
    }

    /// Playlist name this entry came from, if the probe included one.
    pub fn playlist_name(&self) -> Option<&str> {
        non_empty(self.playlist_title.as_deref()).or_else(|| non_empty(self.playlist.as_deref()))
    }

    /// URL to fetch this entry: explicit URL fields first, then the
    /// watch-page form built from the id. Flat entries sometimes carry
    /// only the id.
    pub fn target_url(&self) -> Option<String> {
        if let Some(u) = non_empty(self.url.as_deref()) {
            return Some(u.to_string());
        }
        if let Some(u) = non_empty(self.webpage_url.as_deref()) {
            return Some(u.to_string());
        }
        non_empty(self.id.as_deref()).map(|id| format!("https://www.youtube.com/watch?v={id}"))
    }

    /// Duration as `H:MM:SS` or `M:SS` (`0:00` when unknown).
    pub fn display_duration(&self) -> String {
        format_duration(self.duration)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Render a duration in seconds for listings: hours only when non-zero,
/// `0:00` for missing, zero or nonsense values.
pub fn format_duration(seconds: Option<f64>) -> String {
    let total = seconds.unwrap_or(0.0);
    if !total.is_finite() || total <= 0.0 {
        return "0:00".to_string();
    }
    let total = total as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
