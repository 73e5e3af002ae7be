//! cohort-reindent - Indentation fixer for the Classic Cohort View tab

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use cohort_reindent::{
    fix_file, parse_args, write_reports, CliArgs, Config, FileReport, ReportOptions, Result,
    WriteMode,
};
use rayon::prelude::*;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let args = parse_args();
    init_logging(args.debug);

    let config = build_config(&args)?;

    let files: Vec<PathBuf> = if args.inputs.is_empty() {
        vec![config.target.clone()]
    } else {
        args.inputs.clone()
    };

    let mode = if args.check {
        WriteMode::Check
    } else if args.stdout {
        WriteMode::Stdout
    } else {
        WriteMode::InPlace {
            atomic: config.atomic_write,
        }
    };

    // Configure thread pool if --jobs specified
    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                warn!("failed to configure thread pool: {e}");
            }
        }
    }

    // Sequential processing for a single file, stdout or --jobs 1
    let use_sequential = files.len() == 1 || args.stdout || args.jobs == Some(1);
    let results: Vec<Result<FileReport>> = if use_sequential {
        files.iter().map(|path| fix_file(path, mode)).collect()
    } else {
        files.par_iter().map(|path| fix_file(path, mode)).collect()
    };

    // Files that succeeded still get their status before the first error aborts the run
    let mut reports = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(file_report) => reports.push(file_report),
            Err(e) => errors.push(e),
        }
    }

    let options = ReportOptions {
        print_document: args.stdout,
        check: args.check,
        silent: config.silent,
    };
    let would_change = write_reports(
        &reports,
        options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    let mut errors = errors.into_iter();
    if let Some(first) = errors.next() {
        for e in errors {
            error!("{e:#}");
        }
        return Err(first);
    }

    Ok(if would_change {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Install the stderr tracing subscriber (`RUST_LOG` overrides the flag)
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build configuration from CLI args and the config file(s)
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        debug!(path = %config_path.display(), "using explicit config file");
        Config::from_toml_file(config_path)?
    } else {
        let cwd = Config::discovery_dir(std::env::current_dir());
        let discovered = Config::discover_config_files(&cwd);
        debug!(files = ?discovered, "discovered config files");
        Config::from_discovered_files(&cwd)
    };

    // Override with CLI arguments
    if args.no_atomic {
        config.atomic_write = false;
    }
    if args.silent {
        config.silent = true;
    }

    debug!(
        target_file = %config.target.display(),
        atomic_write = config.atomic_write,
        silent = config.silent,
        "configuration"
    );

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}
