//! Tests for info, playlist and check.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_info() {
    match parse(&["ytget", "info", "https://example.com/v"]) {
        Some(CliCommand::Info { url }) => assert_eq!(url, "https://example.com/v"),
        _ => panic!("expected Info"),
    }
}

#[test]
fn cli_parse_playlist_defaults() {
    match parse(&["ytget", "playlist", "https://example.com/list"]) {
        Some(CliCommand::Playlist {
            url,
            all,
            items,
            limit,
        }) => {
            assert_eq!(url, "https://example.com/list");
            assert!(!all);
            assert!(items.is_none());
            assert!(limit.is_none());
        }
        _ => panic!("expected Playlist"),
    }
}

#[test]
fn cli_parse_playlist_all() {
    match parse(&["ytget", "playlist", "u", "--all"]) {
        Some(CliCommand::Playlist { all, .. }) => assert!(all),
        _ => panic!("expected Playlist with --all"),
    }
}

#[test]
fn cli_parse_playlist_items() {
    match parse(&["ytget", "playlist", "u", "--items", "1,3,5-7"]) {
        Some(CliCommand::Playlist { items, .. }) => {
            assert_eq!(items.as_deref(), Some("1,3,5-7"));
        }
        _ => panic!("expected Playlist with --items"),
    }
}

#[test]
fn cli_parse_playlist_limit() {
    match parse(&["ytget", "playlist", "u", "--limit", "5"]) {
        Some(CliCommand::Playlist { limit, .. }) => assert_eq!(limit, Some(5)),
        _ => panic!("expected Playlist with --limit"),
    }
}

#[test]
fn cli_parse_playlist_all_conflicts_with_items() {
    assert!(Cli::try_parse_from(["ytget", "playlist", "u", "--all", "--items", "1"]).is_err());
}

#[test]
fn cli_parse_check() {
    match parse(&["ytget", "check"]) {
        Some(CliCommand::Check) => {}
        _ => panic!("expected Check"),
    }
}
