// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library error type.
//!
//! A tool exiting nonzero is a check result, not an error. These variants
//! cover the environment faults the caller has to deal with.

use std::path::PathBuf;

/// Errors raised while evaluating or running checks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The shell could not be started for a command.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The change set could not be read from the repository.
    #[error("failed to list changes in {}: {source}", path.display())]
    Git {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid.
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A check name that is not in the registry.
    #[error(
        "unknown check `{0}` (expected one of: {names})",
        names = crate::checks::CHECK_NAMES.join(", ")
    )]
    UnknownCheck(String),

    /// Writing to the output sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
