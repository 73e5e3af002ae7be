/// Markers and regex patterns for locating the Classic Cohort View section
///
/// The section regex is compiled once at first use via `LazyLock`.
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Comment that opens the Classic Cohort View tab in the page source
pub const SECTION_START_MARKER: &str = "{/* Tab 6: Classic Cohort View */}";

/// Closing tag that ends the section (first occurrence after the marker)
pub const SECTION_END_TAG: &str = "</Tab>";

/// Build a multi-line regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. This is acceptable because all patterns
/// in this module are built from compile-time constants that are verified by
/// tests. The panic occurs at first access of the `LazyLock` static.
fn build_re(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .unicode(true)
        .build()
        .unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

// Leading whitespace, marker, then the shortest span up to the end tag.
// The leading `\s*` swallows the newline(s) before the marker, so the
// matched text normally starts with an empty line.
pub static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_re(&format!(
        r"\s*{}.*?{}",
        regex::escape(SECTION_START_MARKER),
        regex::escape(SECTION_END_TAG)
    ))
});
