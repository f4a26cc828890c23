//! Tests for the bare invocation and the get subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_bare_invocation_is_interactive() {
    assert!(parse(&["ytget"]).is_none());
}

#[test]
fn cli_parse_get() {
    match parse(&["ytget", "get", "https://youtu.be/abc123"]) {
        Some(CliCommand::Get { url }) => assert_eq!(url, "https://youtu.be/abc123"),
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_requires_url() {
    assert!(Cli::try_parse_from(["ytget", "get"]).is_err());
}

#[test]
fn cli_parse_get_keeps_url_verbatim() {
    let odd = "https://example.com/watch?v=a%20b&list=x";
    match parse(&["ytget", "get", odd]) {
        Some(CliCommand::Get { url }) => assert_eq!(url, odd),
        _ => panic!("expected Get"),
    }
}
