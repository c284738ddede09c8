// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ESLint, for JavaScript.

use super::{Tool, looks_good_message};

/// ESLint, found in `node_modules` or on the PATH.
pub struct Eslint;

impl Tool for Eslint {
    fn name(&self) -> &'static str {
        "eslint"
    }

    fn title(&self) -> &'static str {
        "ESLint"
    }

    fn binary(&self) -> &'static str {
        "eslint"
    }

    fn probes(&self) -> &'static [&'static str] {
        &["./node_modules/.bin/eslint", "eslint"]
    }

    fn config_file(&self) -> &'static str {
        ".eslintrc"
    }

    fn message(&self, status: i32) -> String {
        looks_good_message(status)
    }
}

#[cfg(test)]
#[path = "eslint_tests.rs"]
mod tests;
