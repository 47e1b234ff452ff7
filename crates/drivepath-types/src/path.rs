//! Path spelling.
//!
//! A path is a string of titles joined by `/`. The root's path is `""`.
//! Normalization only trims separators at both ends: internal empty segments
//! are kept and nothing is escaped, so a title containing `/` is
//! indistinguishable from two segments.

/// Path separator.
pub const SEPARATOR: char = '/';

/// Strip all leading and trailing separators.
pub fn normalize(path: &str) -> &str {
    path.trim_matches(SEPARATOR)
}

/// Append a title to a parent path, normalizing the result.
pub fn join(parent: &str, title: &str) -> String {
    normalize(&format!("{parent}{SEPARATOR}{title}")).to_string()
}

/// Substring after the last separator (the whole path if there is none).
pub fn last_segment(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Split a path into `(parent, name)` at the last separator.
///
/// A path without separators has parent `""`.
pub fn split_last(path: &str) -> (&str, &str) {
    match path.rfind(SEPARATOR) {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}
