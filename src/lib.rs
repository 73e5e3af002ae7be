//! cohort-reindent - Indentation fixer for the Classic Cohort View tab
//!
//! Locates the Classic Cohort View section of a generated page source and
//! rewrites the leading whitespace of its lines from a fixed rule table.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use process::{
    fix_document, fix_file, write_reports, FileReport, FixOutcome, ReportOptions, WriteMode,
};
