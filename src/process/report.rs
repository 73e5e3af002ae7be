//! Status output for processed files
//!
//! Decides which stream each line goes to: documents and status lines go to
//! `out`, except under `--stdout` where the document owns `out` and status
//! lines move to `err`.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::process::pipeline::{FileReport, NOT_FOUND_MESSAGE};

/// Output switches taken from the command line and config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print each resulting document (`--stdout`)
    pub print_document: bool,
    /// Nothing was written; report files that would change (`--check`)
    pub check: bool,
    /// Suppress status lines
    pub silent: bool,
}

/// Status line for one file, `None` when there is nothing to say
fn status_line(report: &FileReport, options: ReportOptions) -> Option<Cow<'static, str>> {
    if !options.check {
        return Some(Cow::Borrowed(report.status_message()));
    }
    if !report.found {
        Some(Cow::Borrowed(NOT_FOUND_MESSAGE))
    } else if report.changed {
        Some(Cow::Owned(format!("Would fix {}", report.path.display())))
    } else {
        None
    }
}

/// Write documents and status lines for `reports`, in order
///
/// Returns `true` when check mode found a file that would change.
pub fn write_reports<O: Write, E: Write>(
    reports: &[FileReport],
    options: ReportOptions,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let mut would_change = false;

    for report in reports {
        if options.print_document {
            out.write_all(report.document.as_bytes())?;
        }
        if options.check && report.changed {
            would_change = true;
        }
        if options.silent {
            continue;
        }
        if let Some(status) = status_line(report, options) {
            if options.print_document {
                writeln!(err, "{status}")?;
            } else {
                writeln!(out, "{status}")?;
            }
        }
    }

    out.flush()?;
    err.flush()?;
    Ok(would_change)
}
