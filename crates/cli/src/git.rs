// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change detection for diff mode.
//!
//! Uses git2 (libgit2) to read the working tree status instead of shelling
//! out to `git status`.

use std::path::{Component, Path, PathBuf};

use git2::{Repository, Status, StatusOptions};

use crate::error::{Error, Result};

/// Source of the files a diff-mode check is scoped to.
///
/// Implementations are queried on every call and must not cache.
pub trait ChangeSet {
    /// Changed file paths, in a stable order.
    fn changes(&self) -> Result<Vec<String>>;
}

/// A fixed list of changes.
impl ChangeSet for Vec<String> {
    fn changes(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }
}

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

/// Working-tree changes of the repository containing `root`.
///
/// Staged, unstaged and untracked files are included. Deleted files are
/// left out since there is nothing left to lint. Paths are relative to
/// `base`, the directory the linters run in, sorted by repository path.
#[derive(Debug, Clone)]
pub struct GitTree {
    root: PathBuf,
    base: PathBuf,
}

impl GitTree {
    /// Changes of the repository at `root`, relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self { base: root.clone(), root }
    }

    /// Report paths relative to `base` instead.
    pub fn relative_to(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = base.into();
        self
    }

    fn git_error(&self, source: git2::Error) -> Error {
        Error::Git { path: self.root.clone(), source }
    }
}

impl ChangeSet for GitTree {
    fn changes(&self) -> Result<Vec<String>> {
        let repo = Repository::discover(&self.root).map_err(|e| self.git_error(e))?;

        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let workdir = repo.workdir().ok_or_else(|| {
            self.git_error(git2::Error::from_str("bare repository has no working tree"))
        })?;
        let workdir = canonical(workdir);
        let base = canonical(&self.base);

        let statuses = repo.statuses(Some(&mut opts)).map_err(|e| self.git_error(e))?;

        let deleted = Status::WT_DELETED | Status::INDEX_DELETED;
        let mut files = Vec::new();
        for entry in statuses.iter() {
            if entry.status().intersects(deleted) {
                continue;
            }
            if let Some(path) = entry.path() {
                let relative = relative_path(&workdir.join(path), &base);
                files.push(relative.to_string_lossy().into_owned());
            }
        }

        tracing::debug!("{} changed file(s) in {}", files.len(), self.root.display());
        Ok(files)
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// `path` expressed relative to `base`. Both must be absolute or both
/// relative.
pub(crate) fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let mut path_parts = path.components().peekable();
    let mut base_parts = base.components().peekable();
    loop {
        match (path_parts.peek(), base_parts.peek()) {
            (Some(a), Some(b)) if a == b => {}
            _ => break,
        }
        path_parts.next();
        base_parts.next();
    }

    let mut relative = PathBuf::new();
    for part in base_parts {
        if !matches!(part, Component::CurDir) {
            relative.push("..");
        }
    }
    relative.extend(path_parts);
    relative
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
