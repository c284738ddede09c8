// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides a scripted [`Probe`] and [`ChangeSet`] so checks can be tested
//! without linters or git installed.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use termcolor::NoColor;

use crate::error::Result;
use crate::git::ChangeSet;
use crate::probe::{CommandOutput, Probe};

/// Scripted environment.
///
/// Binaries are "installed" by name (the argument passed to
/// `command -v`). Every command is recorded.
#[derive(Default)]
pub struct FakeProbe {
    binaries: HashSet<String>,
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
    exit_status: i32,
    captured: RefCell<Vec<String>>,
    executed: RefCell<Vec<String>>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binary(mut self, binary: &str) -> Self {
        self.binaries.insert(binary.to_string());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn exiting_with(mut self, status: i32) -> Self {
        self.exit_status = status;
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    pub fn captured(&self) -> Vec<String> {
        self.captured.borrow().clone()
    }
}

impl Probe for FakeProbe {
    fn capture(&self, command: &str) -> Result<CommandOutput> {
        self.captured.borrow_mut().push(command.to_string());
        let stdout = command
            .strip_prefix("command -v ")
            .filter(|binary| self.binaries.contains(*binary))
            .map(|binary| format!("/usr/bin/{}\n", binary))
            .unwrap_or_default();
        Ok(CommandOutput { stdout, status: 0 })
    }

    fn execute(&self, command: &str) -> Result<CommandOutput> {
        self.executed.borrow_mut().push(command.to_string());
        Ok(CommandOutput { stdout: String::new(), status: self.exit_status })
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}

/// Change set returning a fixed list and counting queries.
#[derive(Default)]
pub struct FakeTree {
    files: Vec<String>,
    pub calls: Cell<usize>,
}

impl FakeTree {
    pub fn new(files: &[&str]) -> Self {
        Self { files: files.iter().map(|f| f.to_string()).collect(), calls: Cell::new(0) }
    }
}

impl ChangeSet for FakeTree {
    fn changes(&self) -> Result<Vec<String>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.files.clone())
    }
}

/// Output sink without color codes.
pub fn sink() -> NoColor<Vec<u8>> {
    NoColor::new(Vec::new())
}

/// Text written to a [`sink`].
pub fn sink_text(sink: &NoColor<Vec<u8>>) -> String {
    String::from_utf8(sink.get_ref().clone()).unwrap()
}

/// Creates a temp directory with a minimal .phare.yml.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".phare.yml"), "diff: false\n").unwrap();
    dir
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".phare.yml"), config).unwrap();
    dir
}
