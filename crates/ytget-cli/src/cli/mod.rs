//! CLI for the ytget video fetcher.

mod commands;
pub mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ytget_core::config;

use commands::{run_check, run_get, run_info, run_interactive, run_playlist};

/// Top-level CLI for the ytget video fetcher.
///
/// Without a subcommand, ytget prompts for a URL on stdin and fetches it.
#[derive(Debug, Parser)]
#[command(name = "ytget")]
#[command(about = "ytget: fetch videos as merged MP4 via yt-dlp", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a single URL without the interactive prompt.
    Get {
        /// Video page URL, forwarded to the downloader as-is.
        url: String,
    },

    /// Show title, uploader and duration without downloading.
    Info {
        /// Video page URL.
        url: String,
    },

    /// List a playlist and optionally fetch some or all of its entries.
    Playlist {
        /// Playlist URL.
        url: String,

        /// Fetch every listed entry.
        #[arg(long, conflicts_with = "items")]
        all: bool,

        /// Fetch selected entries, 1-based, e.g. `--items 1,3,5-7`.
        #[arg(long, value_name = "SPEC")]
        items: Option<String>,

        /// Override the configured listing limit for this run.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Verify the downloader binary is installed and print its version.
    Check,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            None => run_interactive(&cfg).await?,
            Some(CliCommand::Get { url }) => run_get(&cfg, &url).await?,
            Some(CliCommand::Info { url }) => run_info(&cfg, &url).await?,
            Some(CliCommand::Playlist {
                url,
                all,
                items,
                limit,
            }) => run_playlist(&cfg, &url, all, items.as_deref(), limit).await?,
            Some(CliCommand::Check) => run_check(&cfg).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
