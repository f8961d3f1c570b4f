//! CLI parse tests.

use super::Cli;
use clap::Parser;
use kita_core::logging::Verbosity;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_defaults() {
    let cli = parse(&["kita-scraper"]);
    assert!(cli.output_dir.is_none());
    assert!(!cli.verbose);
    assert!(!cli.quiet);
    assert_eq!(cli.verbosity(), Verbosity::Normal);
}

#[test]
fn cli_parse_output_dir() {
    let cli = parse(&["kita-scraper", "--output-dir", "/tmp/kita"]);
    assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/kita")));
}

#[test]
fn cli_parse_verbose() {
    for flags in [&["kita-scraper", "--verbose"][..], &["kita-scraper", "-v"][..]] {
        let cli = parse(flags);
        assert!(cli.verbose);
        assert_eq!(cli.verbosity(), Verbosity::Verbose);
    }
}

#[test]
fn cli_parse_quiet() {
    for flags in [&["kita-scraper", "--quiet"][..], &["kita-scraper", "-q"][..]] {
        let cli = parse(flags);
        assert!(cli.quiet);
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }
}

#[test]
fn cli_verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["kita-scraper", "-v", "-q"]).is_err());
}
