//! Core engine for the kita journal scraper.
//!
//! Pure pieces first (filename derivation, tallies), then the fetch-and-tag
//! pipeline and the orchestrator that walks the configured weekday range via
//! a [`session::PageSession`] implementation.

pub mod config;
pub mod exif_tag;
pub mod fetch;
pub mod filename;
pub mod logging;
pub mod pipeline;
pub mod scraper;
pub mod session;
pub mod tally;
