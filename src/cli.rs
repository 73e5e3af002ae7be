//! Command-line interface for cohort-reindent.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Files to fix (empty = configured target)
    pub inputs: Vec<PathBuf>,

    /// Output to stdout instead of in-place
    pub stdout: bool,

    /// Report files that would change without writing them
    pub check: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Overwrite directly instead of temp file + rename
    pub no_atomic: bool,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    pub jobs: Option<usize>,

    /// Enable debug output
    pub debug: bool,

    /// Silent mode (no status messages)
    pub silent: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("cohort-reindent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize indentation of the Classic Cohort View tab in a page source")
        .arg(
            Arg::new("inputs")
                .help("Files to fix [default: app/page.js, or `target` from the config file]")
                .value_name("FILE")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Print the fixed document to stdout instead of modifying files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Don't write; exit with status 1 if any file would change")
                .action(ArgAction::SetTrue)
                .conflicts_with("stdout"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-atomic")
                .long("no-atomic")
                .help("Overwrite files directly instead of writing a temp file and renaming it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of parallel jobs (0=auto, 1=sequential)")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config, match offsets, line classification)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no status messages)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        stdout: matches.get_flag("stdout"),
        check: matches.get_flag("check"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        no_atomic: matches.get_flag("no-atomic"),
        jobs: matches.get_one::<usize>("jobs").copied(),
        debug: matches.get_flag("debug"),
        silent: matches.get_flag("silent"),
    }
}
