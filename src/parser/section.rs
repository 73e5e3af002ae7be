//! Section extraction
//!
//! Finds the Classic Cohort View region inside a page source. The scan is
//! read-only; a document without the region yields `None`.

use tracing::debug;

use super::patterns::SECTION_RE;

/// A matched section and its byte offsets within the scanned document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMatch<'a> {
    /// Matched text, including the whitespace that precedes the marker
    pub text: &'a str,
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
}

impl<'a> SectionMatch<'a> {
    /// Text of the document strictly before the section
    #[must_use]
    pub fn prefix(&self, document: &'a str) -> &'a str {
        &document[..self.start]
    }

    /// Text of the document strictly after the section
    #[must_use]
    pub fn suffix(&self, document: &'a str) -> &'a str {
        &document[self.end..]
    }
}

/// Locate the first Classic Cohort View section in `document`
#[must_use]
pub fn find_section(document: &str) -> Option<SectionMatch<'_>> {
    let m = SECTION_RE.find(document)?;
    debug!(start = m.start(), end = m.end(), "found section");
    Some(SectionMatch {
        text: m.as_str(),
        start: m.start(),
        end: m.end(),
    })
}
