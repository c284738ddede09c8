// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! scss-lint, for SCSS stylesheets.

use super::{Tool, no_style_errors_message};

/// scss-lint is a Ruby gem, so there is no local `node_modules` binary to
/// look for. Only the PATH is probed.
pub struct ScssLint;

impl Tool for ScssLint {
    fn name(&self) -> &'static str {
        "scsslint"
    }

    fn title(&self) -> &'static str {
        "ScssLint"
    }

    fn binary(&self) -> &'static str {
        "scss-lint"
    }

    fn probes(&self) -> &'static [&'static str] {
        &["scss-lint"]
    }

    fn config_file(&self) -> &'static str {
        ".scss-lint.yml"
    }

    fn message(&self, status: i32) -> String {
        no_style_errors_message(status)
    }
}

#[cfg(test)]
#[path = "scss_lint_tests.rs"]
mod tests;
