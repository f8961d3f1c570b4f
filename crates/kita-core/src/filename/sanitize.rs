//! Filesystem-safe sanitization for derived base names.

/// Characters removed outright: the metacharacters entry titles are known to
/// carry (`: / * &`) plus everything reserved on common filesystems.
fn is_illegal(c: char) -> bool {
    matches!(c, ':' | '/' | '*' | '&' | '\\' | '<' | '>' | '"' | '|' | '?') || c.is_control()
}

/// Sanitizes a derived base name for safe use as a filename.
///
/// - Removes `: / * &`, `\ < > " | ?`, NUL and other control characters;
///   interior spaces survive
/// - Trims leading/trailing spaces and dots
/// - Limits length to 255 bytes (Linux NAME_MAX)
pub fn sanitize_component(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let cleaned: String = name.chars().filter(|c| !is_illegal(*c)).collect();
    let trimmed = cleaned.trim_matches(|c| c == ' ' || c == '.');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
