//! Delegation to the external downloader binary.
//!
//! ytget does no media transfer itself. Fetches run the downloader with
//! inherited stdio and report its exit; metadata probes capture output and
//! live in the `metadata` module.

mod args;
mod error;
mod run;

pub use args::{fetch_args, playlist_probe_args, video_probe_args};
pub use error::{classify_probe_failure, YtdlpError};
pub use run::{fetch, version, FetchOutcome};
