//! Media fetch-and-tag pipeline.
//!
//! Downloads every URL of one journal-entry batch sequentially, persisting
//! each under a derived name and stamping images with the entry date.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::exif_tag::add_date_to_exif;
use crate::fetch::fetch_url;
use crate::filename::derive_filename;
use crate::tally::BatchOutcome;

/// Downloads `urls` in input order into `output_dir` and returns the batch
/// tally (`succeeded + failed == urls.len()`).
///
/// Each URL is handled independently: a failed fetch or write is counted and
/// logged, never aborting the rest of the batch. Existing files are
/// overwritten. EXIF tagging is best-effort and does not affect the tally.
/// An empty `urls` returns a zero outcome without any I/O.
pub fn download_media_files(
    day: NaiveDate,
    title: &str,
    urls: &[String],
    output_dir: &Path,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (index, url) in urls.iter().enumerate() {
        let ordinal = index + 1;
        let filename = derive_filename(day, title, ordinal, url);
        let output_path = output_dir.join(&filename);

        tracing::info!("Downloading {}/{} - {}", ordinal, urls.len(), filename);

        let bytes = match fetch_url(url) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Error downloading {}: {}", url, e);
                outcome.failed += 1;
                continue;
            }
        };

        match fs::write(&output_path, &bytes) {
            Ok(()) => {
                outcome.succeeded += 1;
                add_date_to_exif(&output_path, day);
            }
            Err(e) => {
                tracing::error!("Error writing {}: {}", output_path.display(), e);
                outcome.failed += 1;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_batch_is_a_no_op() {
        let day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        // A directory that does not exist: zero URLs must mean zero I/O.
        let dir = PathBuf::from("/nonexistent/kita-pipeline-test");
        let outcome = download_media_files(day, "title", &[], &dir);
        assert_eq!(outcome, BatchOutcome::default());
        assert!(!dir.exists());
    }
}
