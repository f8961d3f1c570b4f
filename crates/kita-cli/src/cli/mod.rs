//! CLI for the kita journal scraper.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use kita_core::config::ScraperConfig;
use kita_core::logging::Verbosity;
use kita_core::scraper::Scraper;

use crate::portal::PortalSession;

/// Scrape pictures from your kita site and save them locally.
#[derive(Debug, Parser)]
#[command(name = "kita-scraper")]
#[command(about = "Scrape pictures from your kita site and save them locally", long_about = None)]
pub struct Cli {
    /// Directory to save downloaded files (overrides OUTPUT_DIR).
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// Runs the scrape and maps the outcome to the process exit code:
/// 0 on full success, 1 on configuration errors, any failed download, or an
/// unhandled error.
pub fn run(cli: Cli) -> i32 {
    match try_run(cli) {
        Ok(0) => 0,
        Ok(failed) => {
            tracing::warn!("Failed to download {} files", failed);
            1
        }
        Err(err) => {
            eprintln!("kita-scraper error: {:#}", err);
            1
        }
    }
}

/// Returns the number of failed downloads.
fn try_run(cli: Cli) -> Result<u64> {
    let mut config = ScraperConfig::from_env()?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    config.ensure_output_dir()?;

    let mut session = PortalSession::new(&config)?;
    let (day_from, day_to) = (config.day_from, config.day_to);

    let scraper = Scraper::new(config);
    let tally = scraper.run(&mut session);
    tally.log_summary(day_from, day_to);

    Ok(tally.download_failed)
}

#[cfg(test)]
mod tests;
