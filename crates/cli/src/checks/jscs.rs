// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSCS, the JavaScript code style checker.

use super::{Tool, looks_good_message};

pub struct Jscs;

impl Tool for Jscs {
    fn name(&self) -> &'static str {
        "jscs"
    }

    fn title(&self) -> &'static str {
        "JSCS"
    }

    fn binary(&self) -> &'static str {
        "jscs"
    }

    fn probes(&self) -> &'static [&'static str] {
        &["./node_modules/.bin/jscs", "jscs"]
    }

    fn config_file(&self) -> &'static str {
        ".jscsrc"
    }

    fn message(&self, status: i32) -> String {
        looks_good_message(status)
    }
}
