// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The check protocol shared by every linter.
//!
//! A check runs when its tool is installed, its config file exists, its
//! target directory exists, and (in diff mode) at least one changed file is
//! left once exclusions are removed. A check that does not run passes.

use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::checks::Tool;
use crate::error::Result;
use crate::filter::Exclusions;
use crate::git::ChangeSet;
use crate::output;
use crate::probe::{Probe, lookup_command};

/// Collaborators a check reads the environment through.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub probe: &'a dyn Probe,
    pub tree: &'a dyn ChangeSet,
}

/// Per-check options.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Restrict the check to changed files.
    pub diff: bool,
    /// Patterns removed from the change set in diff mode.
    pub exclude: Vec<String>,
}

/// One linter invocation.
pub struct Check<'a> {
    tool: Box<dyn Tool>,
    path: PathBuf,
    diff: bool,
    exclusions: Exclusions,
    ctx: CheckContext<'a>,
    status: Option<i32>,
}

impl<'a> Check<'a> {
    pub fn new(
        tool: Box<dyn Tool>,
        path: impl Into<PathBuf>,
        options: &CheckOptions,
        ctx: CheckContext<'a>,
    ) -> Self {
        Self {
            tool,
            path: path.into(),
            diff: options.diff,
            exclusions: Exclusions::new(&options.exclude),
            ctx,
            status: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.tool.name()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn diff(&self) -> bool {
        self.diff
    }

    /// Exit status of the last run; `None` until [`Check::run`] completes.
    pub fn status(&self) -> Option<i32> {
        self.status
    }

    /// Path of the tool's config file.
    pub fn config(&self) -> PathBuf {
        self.path.join(self.tool.config_file())
    }

    pub fn excluded_files(&self) -> &Exclusions {
        &self.exclusions
    }

    /// The first of the tool's executables that resolves, if any.
    pub fn resolve_binary(&self) -> Option<&'static str> {
        self.tool.probes().iter().copied().find(|binary| {
            match self.ctx.probe.capture(&lookup_command(binary)) {
                Ok(output) => !output.stdout.trim().is_empty(),
                Err(e) => {
                    tracing::debug!("{} lookup failed: {}", binary, e);
                    false
                }
            }
        })
    }

    /// The resolved binary, when the config file and directory exist too.
    fn runnable_binary(&self) -> Option<&'static str> {
        let binary = self
            .resolve_binary()
            .filter(|_| self.ctx.probe.file_exists(&self.config()))
            .filter(|_| self.ctx.probe.dir_exists(&self.path));
        tracing::debug!("{}: able to run = {}", self.name(), binary.is_some());
        binary
    }

    /// Whether the tool is installed, configured, and has a directory to
    /// work on.
    pub fn able_to_run(&self) -> bool {
        self.runnable_binary().is_some()
    }

    /// Changed files left after exclusions, in change-set order.
    pub fn files_to_check(&self) -> Result<Vec<String>> {
        let changes = self.ctx.tree.changes()?;
        Ok(self.exclusions.apply(changes))
    }

    /// The command to execute, or `None` when the check should be skipped.
    fn planned_command(&self) -> Result<Option<String>> {
        let Some(binary) = self.runnable_binary() else {
            return Ok(None);
        };
        if !self.diff {
            return Ok(Some(self.tool.default_command(binary, &self.path)));
        }
        let files = self.files_to_check()?;
        if files.is_empty() {
            tracing::debug!("{}: no changed files in scope", self.name());
            return Ok(None);
        }
        Ok(Some(self.tool.diff_command(binary, &files)))
    }

    pub fn should_run(&self) -> Result<bool> {
        Ok(self.planned_command()?.is_some())
    }

    /// The shell command for the current scope. Rebuilt on every call.
    ///
    /// Uses the resolved binary, or the bare tool name when nothing
    /// resolves.
    pub fn command(&self) -> Result<String> {
        let binary = self.resolve_binary().unwrap_or_else(|| self.tool.binary());
        if self.diff {
            Ok(self.tool.diff_command(binary, &self.files_to_check()?))
        } else {
            Ok(self.tool.default_command(binary, &self.path))
        }
    }

    /// Run the check and record its status.
    ///
    /// A skipped check records 0 and prints nothing. Otherwise the banner
    /// is printed, the tool runs with inherited output, and one result line
    /// follows.
    pub fn run(&mut self, out: &mut dyn WriteColor) -> Result<i32> {
        let Some(command) = self.planned_command()? else {
            tracing::debug!("{}: skipped", self.name());
            self.status = Some(0);
            return Ok(0);
        };

        output::banner(out, self.tool.title())?;
        let result = self.ctx.probe.execute(&command)?;
        self.status = Some(result.status);
        output::outcome(out, result.status, &self.tool.message(result.status))?;

        Ok(result.status)
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
