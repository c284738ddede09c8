// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the phare binary against throwaway
//! projects with fake linters on the PATH.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the phare binary
pub fn phare_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("phare"));
    cmd.env_remove("PHARE_CONFIG").env_remove("PHARE_LOG");
    cmd
}

/// A throwaway project directory plus a directory of fake linters.
///
/// The fake linters live outside the project so they never show up as
/// changed files.
pub struct Project {
    dir: TempDir,
    bin: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap(), bin: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Write `.phare.yml`.
    pub fn config(&self, content: &str) {
        self.file(".phare.yml", content);
    }

    /// Install a fake linter on the PATH.
    ///
    /// The fake prints `<name> <args>` and exits with `status`.
    pub fn tool(&self, name: &str, status: i32) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\necho \"{name} $*\"\nexit {status}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Install a fake linter under `node_modules/.bin` in the project.
    ///
    /// The fake prints `local-<name> <args>` and exits with `status`.
    pub fn local_tool(&self, name: &str, status: i32) {
        use std::os::unix::fs::PermissionsExt;

        let rel = format!("node_modules/.bin/{name}");
        self.file(&rel, &format!("#!/bin/sh\necho \"local-{name} $*\"\nexit {status}\n"));
        let path = self.path().join(rel);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// phare running inside the project with the fake linters first on
    /// the PATH.
    pub fn phare(&self) -> Command {
        self.phare_in(".")
    }

    /// phare running in a subdirectory of the project.
    pub fn phare_in(&self, subdir: &str) -> Command {
        let system = std::env::var("PATH").unwrap_or_default();
        let mut cmd = phare_cmd();
        cmd.current_dir(self.path().join(subdir))
            .env("PATH", format!("{}:{}", self.bin.path().display(), system));
        cmd
    }

    /// Turn the project into a git repo and commit everything in it.
    pub fn commit_all(&self) {
        let steps: [&[&str]; 5] = [
            &["init", "-q"],
            &["config", "user.email", "test@example.com"],
            &["config", "user.name", "Test User"],
            &["add", "-A"],
            &["commit", "-q", "-m", "initial"],
        ];
        for args in steps {
            Command::new("git")
                .args(args)
                .current_dir(self.path())
                .output()
                .expect("git should run");
        }
    }
}
