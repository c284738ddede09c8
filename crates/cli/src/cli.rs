// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::config::Config;

/// Run the linters a project is configured for
#[derive(Parser)]
#[command(name = "phare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "PHARE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory to run the checks against
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Only check files changed in the working tree
    #[arg(long)]
    pub diff: bool,

    /// Skip these checks (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CHECKS")]
    pub skip: Vec<String>,

    /// Run only these checks (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CHECKS")]
    pub only: Vec<String>,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    ///
    /// `--diff` can only turn diff mode on. List flags replace the file's
    /// lists when given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(directory) = &self.directory {
            config.directory = Some(directory.clone());
        }
        if self.diff {
            config.diff = true;
        }
        if !self.skip.is_empty() {
            config.skip = self.skip.clone();
        }
        if !self.only.is_empty() {
            config.only = self.only.clone();
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
