//! Section reindentation.
//!
//! - [`indenter`]: Classifies each section line against the ordered rule table
//!   and assigns its fixed indentation

pub mod indenter;

pub use indenter::{reindent_section, LineKind, SectionIndenter};
