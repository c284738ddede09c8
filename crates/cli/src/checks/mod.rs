// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linter variants.
//!
//! Each variant describes how to find, configure and invoke one tool. The
//! decision to run and the execution itself live in [`crate::check::Check`].

use std::path::Path;

use crate::error::{Error, Result};

pub mod eslint;
pub mod jscs;
pub mod jshint;
pub mod rubocop;
pub mod scss_lint;
pub mod stylelint;

pub use eslint::Eslint;
pub use jscs::Jscs;
pub use jshint::Jshint;
pub use rubocop::Rubocop;
pub use scss_lint::ScssLint;
pub use stylelint::Stylelint;

/// Canonical check order. Checks run in this order.
pub const CHECK_NAMES: &[&str] = &["rubocop", "scsslint", "stylelint", "jshint", "jscs", "eslint"];

/// Tool-specific details of a check.
pub trait Tool {
    /// Registry name, as used by `skip`, `only` and `checks.<name>`.
    fn name(&self) -> &'static str;

    /// Human-readable name for the banner.
    fn title(&self) -> &'static str;

    /// Executable named in the command when no lookup resolves.
    fn binary(&self) -> &'static str;

    /// Executables looked up to decide whether the tool is installed.
    ///
    /// Tried in order; the first one found wins.
    fn probes(&self) -> &'static [&'static str];

    /// Config file the tool expects at the project root.
    fn config_file(&self) -> &'static str;

    /// Invocation covering the whole project.
    ///
    /// `binary` is the executable that resolved, so a local install runs
    /// the local one.
    fn default_command(&self, binary: &str, path: &Path) -> String {
        let path = path.to_string_lossy();
        shell_words::join([binary, &*path])
    }

    /// Invocation limited to `files`. Each file is quoted only when the
    /// shell would otherwise split or interpret it.
    fn diff_command(&self, binary: &str, files: &[String]) -> String {
        shell_words::join(std::iter::once(binary).chain(files.iter().map(String::as_str)))
    }

    /// Result line for a finished run.
    fn message(&self, status: i32) -> String;
}

/// Message used by tools that report success as "looking good".
pub(crate) fn looks_good_message(status: i32) -> String {
    if status == 0 {
        "Everything looks good from here!".to_string()
    } else {
        format!("Something went wrong. Program exited with {}.", status)
    }
}

/// Message used by the style linters.
pub(crate) fn no_style_errors_message(status: i32) -> String {
    if status == 0 {
        "No code style errors found.".to_string()
    } else {
        format!("Something went wrong. Program exited with {}", status)
    }
}

/// All tools in canonical order.
pub fn all_tools() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(Rubocop),
        Box::new(ScssLint),
        Box::new(Stylelint),
        Box::new(Jshint),
        Box::new(Jscs),
        Box::new(Eslint),
    ]
}

/// Look up a tool by registry name.
pub fn get_tool(name: &str) -> Option<Box<dyn Tool>> {
    all_tools().into_iter().find(|t| t.name() == name)
}

/// Select the tools to run.
///
/// A non-empty `only` restricts the set; `skip` removes from it. Canonical
/// order is kept either way. Unknown names are rejected.
pub fn select(skip: &[String], only: &[String]) -> Result<Vec<Box<dyn Tool>>> {
    if let Some(unknown) = skip
        .iter()
        .chain(only)
        .find(|name| !CHECK_NAMES.contains(&name.as_str()))
    {
        return Err(Error::UnknownCheck(unknown.clone()));
    }

    Ok(all_tools()
        .into_iter()
        .filter(|tool| only.is_empty() || only.iter().any(|n| n == tool.name()))
        .filter(|tool| !skip.iter().any(|n| n == tool.name()))
        .collect())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
