//! Configuration management for cohort-reindent.
//!
//! This module provides the [`Config`] struct which controls where the tool
//! looks and how it writes. Configuration can be loaded from:
//! - TOML files (`cohort-reindent.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching the working directory and
//! its parents up to the filesystem root, plus the user's home directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["cohort-reindent.toml"];

/// Page source rewritten when no file is given
pub const DEFAULT_TARGET: &str = "app/page.js";

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_target() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET)
}
fn default_true() -> bool {
    true
}

/// Main configuration struct for cohort-reindent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// File to fix when none is given on the command line (default: `app/page.js`)
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Replace files via temp file + rename (default: true)
    #[serde(default = "default_true")]
    pub atomic_write: bool,

    /// Suppress status messages (default: false)
    #[serde(default)]
    pub silent: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub target: Option<PathBuf>,
    pub atomic_write: Option<bool>,
    pub silent: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target: default_target(),
            atomic_write: true,
            silent: false,
        }
    }
}

impl Config {
    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.target.as_os_str().is_empty() {
            return Some("target must not be empty".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let partial: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = &partial.target {
            self.target.clone_from(v);
        }
        if let Some(v) = partial.atomic_write {
            self.atomic_write = v;
        }
        if let Some(v) = partial.silent {
            self.silent = v;
        }
    }

    /// Discover config files from `start_dir` and its parents
    ///
    /// Returns list of config file paths in order of priority (least specific first):
    /// home directory, then ancestors from the root down to `start_dir`.
    #[must_use]
    pub fn discover_config_files(start_dir: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let mut ancestors: Vec<&Path> = start_dir.ancestors().collect();
        ancestors.reverse();

        for ancestor in ancestors {
            for config_name in CONFIG_FILE_NAMES {
                let config_path = ancestor.join(config_name);
                if config_path.is_file() && !config_files.contains(&config_path) {
                    config_files.push(config_path);
                }
            }
        }

        config_files
    }

    /// Directory to start discovery from, given the result of `current_dir()`
    ///
    /// An unreadable working directory leaves only the home directory config.
    #[must_use]
    pub fn discovery_dir(cwd: std::io::Result<PathBuf>) -> PathBuf {
        cwd.unwrap_or_else(|e| {
            warn!("cannot read working directory, config discovery limited to home: {e}");
            PathBuf::new()
        })
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Files that cannot be read or parsed are skipped with a warning.
    #[must_use]
    pub fn from_discovered_files(start_dir: &Path) -> Self {
        let mut config = Self::default();
        for path in &Self::discover_config_files(start_dir) {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => warn!(path = %path.display(), "failed to parse config: {e}"),
                },
                Err(e) => warn!(path = %path.display(), "failed to read config: {e}"),
            }
        }
        config
    }
}
