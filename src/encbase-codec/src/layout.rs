//! Presentation helpers for encoded text.
//!
//! Grouped or wrapped text decodes back to the same bytes as long as
//! the inserted characters are declared as separators.

/// Splits `encoded` into groups of `width` characters joined by
/// `separator`.
///
/// A `width` of zero leaves the text untouched.
pub fn group(encoded: &str, width: usize, separator: &str) -> String {
    if width == 0 {
        return encoded.to_owned();
    }

    let mut out = String::with_capacity(encoded.len() + encoded.len() / width * separator.len());
    for (i, c) in encoded.chars().enumerate() {
        if i != 0 && i % width == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }

    out
}

/// Breaks `encoded` into lines of at most `width` characters.
pub fn wrap(encoded: &str, width: usize) -> String {
    group(encoded, width, "\n")
}
