//! Layered settings for the shell application.
//!
//! These only tune ambient behavior (logging). They never touch the fixed
//! [`FixtureConfig`](crate::config::FixtureConfig) record.

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level settings for the `fkit` binary.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub log: LogSettings,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Minimum level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Optional module-directed filter, e.g. `fkit_kernel=debug`.
    pub filter: Option<String>,
    pub console: bool,
    /// Enables rolling file output into this directory.
    pub directory: Option<PathBuf>,
    pub max_files: usize,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            directory: None,
            max_files: 10,
            json: false,
        }
    }
}
