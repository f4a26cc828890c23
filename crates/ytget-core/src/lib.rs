pub mod config;
pub mod logging;

pub mod control;
pub mod downloader;
pub mod metadata;
pub mod selection;
