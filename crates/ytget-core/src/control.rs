//! Cooperative cancellation for multi-entry fetches.
//!
//! The flag is checked between playlist entries, never mid-download: the
//! in-flight downloader process shares the terminal's process group and
//! receives SIGINT directly, so only scheduling of further entries is ours
//! to stop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancel token. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Latches; there is no reset.
    pub fn request(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    /// True once cancellation has been requested.
    pub fn is_requested(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// Spawn a task that sets `flag` on the first Ctrl-C.
///
/// This installs tokio's process-wide SIGINT handler, which stays in place
/// after the listener fires. Later Ctrl-Cs therefore do not kill this
/// process; they reach the in-flight child through the terminal and end
/// the batch via its exit status.
pub fn listen_for_ctrl_c(flag: &CancelFlag) {
    let flag = flag.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("ctrl-c received, stopping after the current entry");
            flag.request();
        }
    });
}
