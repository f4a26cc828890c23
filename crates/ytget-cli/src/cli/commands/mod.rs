//! CLI command handlers, one file per command.

mod check;
mod get;
mod info;
mod interactive;
mod playlist;

pub use check::run_check;
pub use get::run_get;
pub use info::run_info;
pub use interactive::run_interactive;
pub use playlist::run_playlist;
