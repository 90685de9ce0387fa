//! Marker-substring scanning
//!
//! Pulls a sub-field out of already extracted text by looking for literal
//! labels such as `"Synonyms:"`.

/// Text following `start`, up to the first `end` after it (or the end of the
/// haystack), with surrounding whitespace trimmed.
///
/// Returns `None` when `start` does not occur or the slice is blank.
pub fn scan_marker<'a>(haystack: &'a str, start: &str, end: Option<&str>) -> Option<&'a str> {
    let from = haystack.find(start)? + start.len();
    let rest = &haystack[from..];

    let until = end
        .and_then(|end| rest.find(end))
        .unwrap_or(rest.len());

    let found = rest[..until].trim();
    (!found.is_empty()).then_some(found)
}
