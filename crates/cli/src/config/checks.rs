// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check-specific configuration structures.

use serde::Deserialize;

use crate::check::CheckOptions;

/// Settings for a single check, under `checks.<name>`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Files (or globs) left out of diff-mode runs.
    pub exclude: Vec<String>,
}

impl CheckConfig {
    /// Options for a check given the global diff setting.
    pub fn options(&self, diff: bool) -> CheckOptions {
        CheckOptions { diff, exclude: self.exclude.clone() }
    }
}
