// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exclusion filtering for diff mode.
//!
//! Patterns are globs. A plain path is a glob that only matches itself, so
//! `app/assets/vendor.js` and `vendor/**` both work.

use globset::{Glob, GlobSet, GlobSetBuilder};

/// Files a check declares out of scope.
#[derive(Debug, Clone)]
pub struct Exclusions {
    patterns: Vec<String>,
    set: GlobSet,
}

impl Default for Exclusions {
    fn default() -> Self {
        Self { patterns: Vec::new(), set: GlobSet::empty() }
    }
}

impl Exclusions {
    /// Build exclusions from pattern strings. Invalid globs are skipped.
    pub fn new(patterns: &[String]) -> Self {
        Self { patterns: patterns.to_vec(), set: build_glob_set(patterns) }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    /// Remove excluded files, keeping the order of the rest.
    pub fn apply(&self, changes: Vec<String>) -> Vec<String> {
        if self.set.is_empty() {
            return changes;
        }
        changes.into_iter().filter(|path| !self.is_excluded(path)).collect()
    }
}

/// Build a GlobSet from pattern strings.
fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        } else {
            tracing::warn!("invalid exclude pattern: {}", pattern);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
