//! Trailing-segment extraction from a source URL.

/// Returns the text after the last `/` of the raw URL string.
///
/// Works on the string as given, without URL parsing; portal media URLs carry
/// signed tokens in the trailing segment and those stay part of the name.
pub fn original_name(url: &str) -> &str {
    match url.rfind('/') {
        Some(i) => &url[i + 1..],
        None => url,
    }
}

/// Returns the extension of `name` (text after the last `.`), or `""` when
/// the name contains no dot.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i + 1..],
        None => "",
    }
}
