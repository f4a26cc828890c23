//! `ytget playlist <url>` – list playlist entries and optionally fetch them.

use anyhow::Result;
use ytget_core::config::YtgetConfig;
use ytget_core::control::{self, CancelFlag};
use ytget_core::downloader::{self, FetchOutcome};
use ytget_core::metadata::{self, PlaylistMeta};
use ytget_core::selection;

use crate::cli::console;

pub async fn run_playlist(
    cfg: &YtgetConfig,
    url: &str,
    all: bool,
    items: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(limit) = limit {
        cfg.playlist_limit = limit;
    }

    let playlist = metadata::probe_playlist(&cfg, url).await?;
    print_listing(&playlist);

    let picked: Vec<usize> = if all {
        (1..=playlist.entries.len()).collect()
    } else if let Some(spec) = items {
        selection::parse_items(spec, playlist.entries.len())?
    } else {
        println!("Nothing fetched; pass --all or --items to download.");
        return Ok(());
    };

    fetch_selected(&cfg, &playlist, &picked).await
}

fn print_listing(playlist: &PlaylistMeta) {
    match playlist.title.as_deref() {
        Some(title) => println!("Playlist: {title} ({} entries)", playlist.total),
        None => println!("{} entries", playlist.total),
    }
    if playlist.truncated() {
        println!("(showing the first {})", playlist.entries.len());
    }
    println!("{:<5} {:<9} {}", "#", "LENGTH", "TITLE");
    for (i, entry) in playlist.entries.iter().enumerate() {
        println!(
            "{:<5} {:<9} {}",
            i + 1,
            entry.display_duration(),
            entry.display_title()
        );
    }
}

/// Fetch the picked entries sequentially, stopping on the first failure or
/// on Ctrl-C between entries.
async fn fetch_selected(
    cfg: &YtgetConfig,
    playlist: &PlaylistMeta,
    picked: &[usize],
) -> Result<()> {
    let cancel = CancelFlag::new();
    control::listen_for_ctrl_c(&cancel);

    let mut completed = 0usize;
    for (k, &index) in picked.iter().enumerate() {
        if cancel.is_requested() {
            console::print_warning("Download cancelled.");
            break;
        }

        let entry = &playlist.entries[index - 1];
        let target = match entry.target_url() {
            Some(target) => target,
            None => {
                console::print_warning(&format!("Skipping entry {index}: no usable URL."));
                continue;
            }
        };

        println!("[{}/{}] {}", k + 1, picked.len(), entry.display_title());
        let outcome = downloader::fetch(cfg, &target).await?;
        console::report_outcome(&cfg.downloader, outcome);
        match outcome {
            FetchOutcome::Completed => completed += 1,
            // First failed entry ends the batch.
            _ => break,
        }
    }

    println!("Fetched {completed} of {} video(s).", picked.len());
    Ok(())
}
