// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! stylelint, for stylesheets.

use std::path::Path;

use super::{Tool, no_style_errors_message};

pub struct Stylelint;

impl Tool for Stylelint {
    fn name(&self) -> &'static str {
        "stylelint"
    }

    fn title(&self) -> &'static str {
        "Stylelint"
    }

    fn binary(&self) -> &'static str {
        "stylelint"
    }

    fn probes(&self) -> &'static [&'static str] {
        &["./node_modules/.bin/stylelint", "stylelint"]
    }

    fn config_file(&self) -> &'static str {
        ".stylelintrc"
    }

    /// stylelint takes file globs rather than directories. The glob is
    /// quoted so stylelint expands it, not the shell.
    fn default_command(&self, binary: &str, path: &Path) -> String {
        let glob = format!("{}/**/*.scss", path.display());
        shell_words::join([binary, glob.as_str()])
    }

    fn message(&self, status: i32) -> String {
        no_style_errors_message(status)
    }
}
