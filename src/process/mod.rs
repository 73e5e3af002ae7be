//! File processing pipeline.
//!
//! A single linear pass per file:
//! - Read the whole document
//! - Locate the Classic Cohort View section ([`crate::parser`])
//! - Reindent its lines ([`crate::format`])
//! - Splice the result between the untouched prefix and suffix
//! - Replace the file (atomically by default), unless only printing or checking
//!
//! [`write_reports`] turns the per-file results into status output.
//!
//! The entry points are [`fix_document`] for in-memory text and [`fix_file`]
//! for a path on disk.

pub mod pipeline;
pub mod report;
pub mod writer;

pub use pipeline::{
    fix_document, fix_file, FileReport, FixOutcome, WriteMode, FIXED_MESSAGE, NOT_FOUND_MESSAGE,
};
pub use report::{write_reports, ReportOptions};
pub use writer::write_document;
