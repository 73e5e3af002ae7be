//! Page source scanning utilities.
//!
//! This module provides the pattern matching used to locate the section to fix:
//! - [`patterns`]: Section markers and the precompiled section regex
//! - [`section`]: [`find_section`] returning the matched text and its offsets
//!
//! The page is never parsed into a tree; the section is found by a single
//! non-greedy regex search over the raw text.

pub mod patterns;
pub mod section;

pub use patterns::{SECTION_END_TAG, SECTION_START_MARKER};
pub use section::{find_section, SectionMatch};
