//! Derivation of unique, filesystem-safe names for downloaded media.
//!
//! A derived name is `{date}_{truncated title}-{ordinal}.{extension}`; the
//! 1-based ordinal guarantees uniqueness within one entry's batch of URLs.

mod path;
mod sanitize;

pub use path::{extension_of, original_name};
pub use sanitize::sanitize_component;

use chrono::NaiveDate;

/// Title length cap (in characters) applied before sanitization, bounding the
/// overall filename length.
const TITLE_MAX_CHARS: usize = 25;

/// Derives the local filename for the `ordinal`-th (1-based) resource of a
/// journal entry. Pure; no I/O.
///
/// The extension is taken verbatim from the trailing path segment of `url`;
/// a segment without a `.` yields a name without an extension.
///
/// - `(2023-01-01, "Test Title", 1, "https://x/image.jpg")` →
///   `"2023-01-01_Test Title-1.jpg"`
/// - `(2023-01-01, "Test Title", 1, "https://x/image")` →
///   `"2023-01-01_Test Title-1"`
pub fn derive_filename(day: NaiveDate, title: &str, ordinal: usize, url: &str) -> String {
    let truncated: String = title.chars().take(TITLE_MAX_CHARS).collect();
    let base = format!("{}_{}-{}", day.format("%Y-%m-%d"), truncated, ordinal);

    let mut sanitized = sanitize_component(&base);
    if sanitized.is_empty() {
        // Keeps the ordinal uniqueness guarantee even if sanitization ever
        // empties the base (the date prefix makes this unreachable today).
        sanitized = format!("file-{}", ordinal);
    }

    let extension = extension_of(original_name(url));
    if extension.is_empty() {
        sanitized
    } else {
        format!("{}.{}", sanitized, extension)
    }
}
