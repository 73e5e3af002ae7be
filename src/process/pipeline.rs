//! Read → match → reindent → write pipeline
//!
//! [`fix_document`] is the pure transformation on text; [`fix_file`] wraps it
//! with the file read and, depending on [`WriteMode`], the file replacement.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::format::reindent_section;
use crate::parser::find_section;
use crate::process::writer::write_document;
use crate::Result;

/// Status printed when the section was found and rewritten
pub const FIXED_MESSAGE: &str = "Fixed Classic Cohorts tab indentation";

/// Status printed when the section is absent
pub const NOT_FOUND_MESSAGE: &str = "Could not find Classic Cohorts tab";

/// Result of running the transformation on a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// Section found; holds the full rewritten document
    Fixed(String),
    /// Section absent; the document must be left untouched
    NotFound,
}

/// Reindent the Classic Cohort View section of `document`
///
/// Text before and after the matched section is copied through unchanged.
#[must_use]
pub fn fix_document(document: &str) -> FixOutcome {
    let Some(section) = find_section(document) else {
        debug!("section marker not found");
        return FixOutcome::NotFound;
    };

    let fixed_section = reindent_section(section.text);
    let prefix = section.prefix(document);
    let suffix = section.suffix(document);

    let mut output = String::with_capacity(prefix.len() + fixed_section.len() + suffix.len());
    output.push_str(prefix);
    output.push_str(&fixed_section);
    output.push_str(suffix);
    FixOutcome::Fixed(output)
}

/// What to do with the rewritten document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file, optionally through a temp file and rename
    InPlace { atomic: bool },
    /// Leave the file alone; the caller prints [`FileReport::document`]
    Stdout,
    /// Leave the file alone; the caller inspects [`FileReport::changed`]
    Check,
}

/// Per-file result of [`fix_file`]
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// Whether the section was present
    pub found: bool,
    /// Whether the rewritten document differs from the file contents
    pub changed: bool,
    /// Rewritten document, or the original text when the section is absent
    pub document: String,
}

impl FileReport {
    /// Status line for this file: fixed or not found
    #[must_use]
    pub fn status_message(&self) -> &'static str {
        if self.found {
            FIXED_MESSAGE
        } else {
            NOT_FOUND_MESSAGE
        }
    }
}

/// Run the pipeline on one file
///
/// I/O failures are returned with the offending path attached. A missing
/// section never touches the file.
pub fn fix_file(path: &Path, mode: WriteMode) -> Result<FileReport> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let FixOutcome::Fixed(document) = fix_document(&original) else {
        info!(path = %path.display(), "section not found, file left unchanged");
        return Ok(FileReport {
            path: path.to_path_buf(),
            found: false,
            changed: false,
            document: original,
        });
    };

    let changed = document != original;
    debug!(path = %path.display(), changed, ?mode, "section reindented");

    if let WriteMode::InPlace { atomic } = mode {
        write_document(path, &document, atomic)?;
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        found: true,
        changed,
        document,
    })
}
