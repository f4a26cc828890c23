//! Argument construction for downloader invocations.
//!
//! Pure functions so the exact argv is testable without spawning anything.
//! The URL always goes last and is passed through verbatim; no quoting or
//! rewriting happens on this side of the exec boundary.

use crate::config::YtgetConfig;

/// Argv for a plain fetch. With a default config this is exactly
/// `-f bestvideo+bestaudio --merge-output-format mp4 -o %(title)s.mp4 <url>`.
pub fn fetch_args(cfg: &YtgetConfig, url: &str) -> Vec<String> {
    vec![
        "-f".to_string(),
        cfg.format.clone(),
        "--merge-output-format".to_string(),
        cfg.merge_format.clone(),
        "-o".to_string(),
        output_template(cfg),
        url.to_string(),
    ]
}

/// Argv for a single-video metadata probe (`--dump-json`).
pub fn video_probe_args(cfg: &YtgetConfig, url: &str) -> Vec<String> {
    let mut args = vec![
        "--dump-json".to_string(),
        "--no-warnings".to_string(),
        "--no-playlist".to_string(),
    ];
    push_probe_timeout(cfg, &mut args);
    args.push(url.to_string());
    args
}

/// Argv for a flat playlist probe: one JSON object per line on stdout.
pub fn playlist_probe_args(cfg: &YtgetConfig, url: &str) -> Vec<String> {
    let mut args = vec![
        "--flat-playlist".to_string(),
        "--dump-json".to_string(),
        "--no-warnings".to_string(),
    ];
    push_probe_timeout(cfg, &mut args);
    args.push(url.to_string());
    args
}

/// Output template, prefixed with the download dir when one is configured.
fn output_template(cfg: &YtgetConfig) -> String {
    match &cfg.download_dir {
        Some(dir) => dir.join(&cfg.output_template).to_string_lossy().into_owned(),
        None => cfg.output_template.clone(),
    }
}

fn push_probe_timeout(cfg: &YtgetConfig, args: &mut Vec<String>) {
    if cfg.probe_timeout_secs > 0 {
        args.push("--socket-timeout".to_string());
        args.push(cfg.probe_timeout_secs.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_fetch_args_match_stock_invocation() {
        let cfg = YtgetConfig::default();
        let args = fetch_args(&cfg, "https://youtu.be/abc123");
        assert_eq!(
            args,
            vec![
                "-f",
                "bestvideo+bestaudio",
                "--merge-output-format",
                "mp4",
                "-o",
                "%(title)s.mp4",
                "https://youtu.be/abc123",
            ]
        );
    }

    #[test]
    fn url_is_forwarded_verbatim() {
        let cfg = YtgetConfig::default();
        let odd = "https://example.com/watch?v=a b&list=c%20d";
        let args = fetch_args(&cfg, odd);
        assert_eq!(args.last().map(String::as_str), Some(odd));
    }

    #[test]
    fn download_dir_prefixes_template() {
        let mut cfg = YtgetConfig::default();
        cfg.download_dir = Some(PathBuf::from("/media/videos"));
        let args = fetch_args(&cfg, "u");
        assert_eq!(args[5], "/media/videos/%(title)s.mp4");
    }

    #[test]
    fn probe_args_carry_socket_timeout() {
        let cfg = YtgetConfig::default();
        let args = video_probe_args(&cfg, "u");
        assert_eq!(
            args,
            vec![
                "--dump-json",
                "--no-warnings",
                "--no-playlist",
                "--socket-timeout",
                "30",
                "u",
            ]
        );
        let args = playlist_probe_args(&cfg, "u");
        assert_eq!(
            args,
            vec![
                "--flat-playlist",
                "--dump-json",
                "--no-warnings",
                "--socket-timeout",
                "30",
                "u",
            ]
        );
    }

    #[test]
    fn zero_timeout_omits_the_flag() {
        let mut cfg = YtgetConfig::default();
        cfg.probe_timeout_secs = 0;
        let args = video_probe_args(&cfg, "u");
        assert!(!args.iter().any(|a| a == "--socket-timeout"));
    }

    #[test]
    fn fetch_args_never_carry_probe_flags() {
        let cfg = YtgetConfig::default();
        let args = fetch_args(&cfg, "u");
        assert!(!args.iter().any(|a| a == "--socket-timeout"));
        assert!(!args.iter().any(|a| a == "--dump-json"));
    }
}
