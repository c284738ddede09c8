// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSHint, for JavaScript.

use super::{Tool, looks_good_message};

pub struct Jshint;

impl Tool for Jshint {
    fn name(&self) -> &'static str {
        "jshint"
    }

    fn title(&self) -> &'static str {
        "JSHint"
    }

    fn binary(&self) -> &'static str {
        "jshint"
    }

    fn probes(&self) -> &'static [&'static str] {
        &["./node_modules/.bin/jshint", "jshint"]
    }

    fn config_file(&self) -> &'static str {
        ".jshintrc"
    }

    fn message(&self, status: i32) -> String {
        looks_good_message(status)
    }
}
