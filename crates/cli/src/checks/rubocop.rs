// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RuboCop, for Ruby.

use super::{Tool, looks_good_message};

pub struct Rubocop;

impl Tool for Rubocop {
    fn name(&self) -> &'static str {
        "rubocop"
    }

    fn title(&self) -> &'static str {
        "Rubocop"
    }

    fn binary(&self) -> &'static str {
        "rubocop"
    }

    fn probes(&self) -> &'static [&'static str] {
        &["rubocop"]
    }

    fn config_file(&self) -> &'static str {
        ".rubocop.yml"
    }

    fn message(&self, status: i32) -> String {
        looks_good_message(status)
    }
}
