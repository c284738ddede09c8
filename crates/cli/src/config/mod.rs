// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! Phare reads an optional `.phare.yml` from the working directory:
//!
//! ```yaml
//! directory: app
//! diff: true
//! skip:
//!   - rubocop
//! checks:
//!   eslint:
//!     exclude:
//!       - app/assets/javascripts/vendor/**
//! ```
//!
//! Command-line flags override the file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

mod checks;

pub use checks::CheckConfig;

/// Default config file name.
pub const CONFIG_FILE: &str = ".phare.yml";

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the checks run against (default: `.`).
    pub directory: Option<PathBuf>,

    /// Only check files changed in the working tree.
    pub diff: bool,

    /// Checks never to run.
    pub skip: Vec<String>,

    /// When non-empty, the only checks to run.
    pub only: Vec<String>,

    /// Per-check settings, keyed by check name.
    pub checks: BTreeMap<String, CheckConfig>,
}

impl Config {
    /// Directory the checks run against.
    pub fn directory(&self) -> &Path {
        self.directory.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Settings for a check, defaulted when not configured.
    pub fn check(&self, name: &str) -> CheckConfig {
        self.checks.get(name).cloned().unwrap_or_default()
    }

    /// Reject `checks.<name>` sections for checks that do not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = self
            .checks
            .keys()
            .find(|name| !crate::checks::CHECK_NAMES.contains(&name.as_str()))
        {
            return Err(Error::UnknownCheck(name.clone()));
        }
        Ok(())
    }
}

/// Find the default config file in `root`.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    let path = root.join(CONFIG_FILE);
    path.is_file().then_some(path)
}

/// Parse configuration from YAML. `path` is only used in errors.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // An empty file is a valid, empty config.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(content)
        .map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the explicit config file if given, else the default one if present.
pub fn load_or_default(explicit: Option<&Path>, root: &Path) -> Result<Config> {
    match explicit {
        Some(path) => load(path),
        None => match find_config(root) {
            Some(path) => load(&path),
            None => Ok(Config::default()),
        },
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
