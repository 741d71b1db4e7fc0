//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_get() {
    match parse(&["fmeta", "get", "file:///tmp/report.pdf"]) {
        CliCommand::Get { uri, pretty } => {
            assert_eq!(uri, "file:///tmp/report.pdf");
            assert!(!pretty);
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_pretty() {
    match parse(&["fmeta", "get", "https://example.com/track.mp3", "--pretty"]) {
        CliCommand::Get { uri, pretty } => {
            assert_eq!(uri, "https://example.com/track.mp3");
            assert!(pretty);
        }
        _ => panic!("expected Get with --pretty"),
    }
}

#[test]
fn cli_parse_modules() {
    assert!(matches!(parse(&["fmeta", "modules"]), CliCommand::Modules));
}

#[test]
fn cli_parse_mime() {
    match parse(&["fmeta", "mime", "track.mp3"]) {
        CliCommand::Mime { name } => assert_eq!(name, "track.mp3"),
        _ => panic!("expected Mime"),
    }
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["fmeta"]).is_err());
}
