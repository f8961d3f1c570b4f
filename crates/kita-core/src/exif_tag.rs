//! Best-effort EXIF date stamping for downloaded images.
//!
//! Portal media carries no useful filesystem timestamps after download, so
//! the entry date is written into the EXIF `DateTime` tag where one exists.
//! Every failure path maps to `false`; this must never fail a download.

use chrono::NaiveDate;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;

/// Extensions eligible for tagging.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "tif"];

/// EXIF timestamp layout, zero time-of-day since only the entry day is known.
const EXIF_DATETIME_FMT: &str = "%Y:%m:%d 00:00:00";

/// Stamps `day` into the EXIF `DateTime` tag of the image at `path`,
/// rewriting the file in place.
///
/// Returns `true` only when a tag was written. Non-image files and images
/// without an existing metadata container yield `false` without being
/// touched; read/write errors are logged and also yield `false`.
pub fn add_date_to_exif(path: &Path, day: NaiveDate) -> bool {
    if !has_image_extension(path) {
        tracing::debug!("skipping EXIF for non-image file: {}", path.display());
        return false;
    }
    if !has_metadata_container(path) {
        tracing::debug!("no EXIF data found in {}", path.display());
        return false;
    }
    match write_datetime(path, day) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("error adding EXIF data to {}: {}", path.display(), e);
            false
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|known| e.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Probes for an embedded EXIF block without modifying the file.
fn has_metadata_container(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };
    let mut reader = BufReader::new(file);
    exif::Reader::new().read_from_container(&mut reader).is_ok()
}

fn write_datetime(path: &Path, day: NaiveDate) -> std::io::Result<()> {
    let mut metadata = Metadata::new_from_path(path)?;
    metadata.set_tag(ExifTag::ModifyDate(day.format(EXIF_DATETIME_FMT).to_string()));
    metadata.write_to_file(path)
}
